use once_cell::sync::Lazy;

use crate::models::domain::{Question, QuestionBank, QuestionOption, ResultCategory};

pub const LEAD_MAGNET_TITLE: &str = "Manager’s Bottleneck Diagnostic";

const QUESTION_TABLE: &[(u32, &str, [(&str, &str, ResultCategory); 3])] = &[
    (
        1,
        "Where do tasks most often slow down or pile up in your department?",
        [
            ("1a", "During hand-offs between different teams or workflow stages.", ResultCategory::Process),
            ("1b", "When waiting for specific individuals to make decisions or approve items.", ResultCategory::Role),
            ("1c", "We often don't realize things are stuck until a deadline is missed.", ResultCategory::Visibility),
        ],
    ),
    (
        2,
        "How clear are roles and responsibilities across your team?",
        [
            ("2a", "Roles are defined, but the workflow processes themselves are clunky.", ResultCategory::Process),
            ("2b", "There is frequent overlap or confusion about who owns what.", ResultCategory::Role),
            ("2c", "Everyone knows their job, but we lack data on actual output quality.", ResultCategory::Visibility),
        ],
    ),
    (
        3,
        "Which of these issues shows up most frequently?",
        [
            ("3a", "Recurring errors or inefficiencies in execution steps.", ResultCategory::Process),
            ("3b", "Disputes over tasks not being in someone's job description.", ResultCategory::Role),
            ("3c", "Surprise operational failures that we didn't see coming.", ResultCategory::Visibility),
        ],
    ),
    (
        4,
        "When performance drops, how confident are you that you know why?",
        [
            ("4a", "I know where the process breaks, but fixing the workflow is difficult.", ResultCategory::Process),
            ("4b", "Unsure, because it often depends on which individual is handling the task.", ResultCategory::Role),
            ("4c", "I usually only find out about the drop after the fact, so root cause is hard to trace.", ResultCategory::Visibility),
        ],
    ),
];

static STANDARD_QUESTION_BANK: Lazy<QuestionBank> = Lazy::new(|| {
    let questions = QUESTION_TABLE
        .iter()
        .map(|(id, text, options)| Question {
            id: *id,
            text: text.to_string(),
            options: options
                .iter()
                .map(|(option_id, option_text, category)| QuestionOption {
                    id: option_id.to_string(),
                    text: option_text.to_string(),
                    category: *category,
                })
                .collect(),
        })
        .collect();

    QuestionBank::new(questions).expect("QUESTION_TABLE covers every category once per question")
});

/// The four-question diagnostic, validated on first access.
pub fn standard_question_bank() -> &'static QuestionBank {
    &STANDARD_QUESTION_BANK
}
