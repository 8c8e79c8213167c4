pub mod answer_set;
pub mod category;
pub mod conversation;
pub mod question;
pub use answer_set::AnswerSet;
pub use category::ResultCategory;
pub use conversation::{ChatRole, ConversationTurn};
pub use question::{Question, QuestionBank, QuestionOption};
