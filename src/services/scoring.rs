use crate::models::domain::{AnswerSet, ResultCategory};

/// Vote count per category, indexed by [`ResultCategory::rank`].
pub fn tally(answers: &AnswerSet) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for category in answers.categories() {
        counts[category.rank()] += 1;
    }
    counts
}

/// Plurality winner of an answer set.
///
/// Ties go to the category declared first (Process, then Role, then Visibility),
/// independent of the order answers were given. An empty set yields Process.
pub fn calculate_result(answers: &AnswerSet) -> ResultCategory {
    let counts = tally(answers);

    let mut winner = ResultCategory::Process;
    for category in ResultCategory::ALL {
        if counts[category.rank()] > counts[winner.rank()] {
            winner = category;
        }
    }
    winner
}

/// Explanatory paragraph for a category label, or an empty string when the
/// label names no known category.
pub fn describe_result(label: &str) -> &'static str {
    label
        .parse::<ResultCategory>()
        .map(ResultCategory::description)
        .unwrap_or("")
}
