pub mod bncc_handler;
pub mod health_handler;
pub mod prompt_handler;
pub mod question_handler;

use actix_web::web;

pub use bncc_handler::{list_components, list_grades, list_skills};
pub use health_handler::health_check;
pub use prompt_handler::quality_prompt;
pub use question_handler::{
    clear_session_history, export_questions, generate_exam_questions, generate_quiz_questions,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(generate_exam_questions)
        .service(generate_quiz_questions)
        .service(export_questions)
        .service(clear_session_history)
        .service(list_components)
        .service(list_grades)
        .service(list_skills)
        .service(quality_prompt);
}
