pub mod bncc_service;
pub mod export_service;
pub mod model_service;
pub mod prompt_builder;
pub mod providers;
pub mod question_parser;
pub mod question_service;
pub mod quiz_parser;

pub use model_service::{GenerationOptions, TextGenerator};
pub use question_service::QuestionService;
