pub mod bncc;
pub mod fallback_quiz;
pub mod prompts;
pub mod quality_prompts;
