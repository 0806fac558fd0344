pub mod handlers;

use crate::{config::Config, models::ErrorResponse, stability::ImageGenerator};
use actix_web::{error::InternalError, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;

/// Shared by every worker. Holds nothing mutable.
pub struct AppState {
    pub generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> web::Data<Self> {
        web::Data::new(Self { generator })
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/api")
                .route("/catalog", web::get().to(handlers::catalog))
                .route("/generate", web::post().to(handlers::generate)),
        );
}

/// Bodies that fail to parse get the same `{message}` envelope as every other 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::bad_request(format!("Invalid request body: {}", err)));
        InternalError::from_response(err, response).into()
    })
}

pub async fn run(config: &Config, generator: Arc<dyn ImageGenerator>) -> std::io::Result<()> {
    let state = AppState::new(generator);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %Dms"))
            .configure(configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
