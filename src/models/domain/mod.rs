pub mod bncc;
pub mod question;
pub mod questions_config;
pub mod quiz_question;
pub use bncc::{BnccComponent, BnccGrade, BnccSkill};
pub use question::Question;
pub use questions_config::QuestionsConfig;
pub use quiz_question::{QuizQuestion, QuizQuestionOption};
