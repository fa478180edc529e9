use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{
    errors::AppError, models::dto::request::BnccSkillsQuery, services::bncc_service,
};

const DEFAULT_SKILL_LIMIT: usize = 5;

#[get("/api/bncc/components")]
pub async fn list_components() -> HttpResponse {
    HttpResponse::Ok().json(bncc_service::components())
}

#[get("/api/bncc/components/{component}/grades")]
pub async fn list_grades(component: web::Path<String>) -> Result<HttpResponse, AppError> {
    let grades = bncc_service::grades_for(&component).ok_or_else(|| {
        AppError::NotFound(format!("BNCC component '{}' not found", component))
    })?;

    Ok(HttpResponse::Ok().json(grades))
}

#[get("/api/bncc/skills")]
pub async fn list_skills(query: web::Query<BnccSkillsQuery>) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let skills = bncc_service::skills_for(
        &query.component,
        &query.grade,
        query.limit.unwrap_or(DEFAULT_SKILL_LIMIT),
    );

    Ok(HttpResponse::Ok().json(skills))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn lists_components_in_table_order() {
        let app = test::init_service(App::new().service(list_components)).await;

        let req = test::TestRequest::get().uri("/api/bncc/components").to_request();
        let body: Vec<String> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.first().map(String::as_str), Some("Matemática"));
        assert_eq!(body.len(), 5);
    }

    #[actix_web::test]
    async fn unknown_component_grades_is_not_found() {
        let app = test::init_service(App::new().service(list_grades)).await;

        let req = test::TestRequest::get()
            .uri("/api/bncc/components/Filosofia/grades")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn skills_fall_back_to_nearest_grade() {
        let app = test::init_service(App::new().service(list_skills)).await;

        let req = test::TestRequest::get()
            .uri("/api/bncc/skills?component=Hist%C3%B3ria&grade=2%C2%BA%20ano&limit=2")
            .to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 2);
        assert!(body[0]["code"]
            .as_str()
            .is_some_and(|code| code.starts_with("EF04HI")));
    }
}
