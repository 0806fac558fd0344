use crate::{
    models::{Catalog, ErrorResponse, GenerateBody},
    server::AppState,
};
use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn catalog() -> HttpResponse {
    HttpResponse::Ok().json(Catalog::current())
}

pub async fn generate(state: web::Data<AppState>, body: web::Json<GenerateBody>) -> HttpResponse {
    let request_id = Uuid::new_v4();

    let request = match body.into_inner().into_request() {
        Ok(request) => request,
        Err(e) => {
            log::warn!("[req:{}] Rejected generation request: {}", request_id, e);
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request(e.to_string()));
        }
    };

    log::info!(
        "[req:{}] Generation requested: {} at {}x{}",
        request_id,
        request.style,
        request.width,
        request.height
    );

    match state.generator.generate(&request).await {
        Ok(image) => {
            log::info!("[req:{}] Generation succeeded", request_id);
            HttpResponse::Ok().json(image)
        }
        Err(e) if e.is_validation() => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(e.to_string()))
        }
        Err(e) => {
            log::error!("[req:{}] Generation error: {}", request_id, e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::generation_failed(e.to_string(), e.suggestion()))
        }
    }
}
