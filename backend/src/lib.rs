pub mod config;
pub mod error;
pub mod manager;
mod memo;
pub mod page;
pub mod response;
pub mod store;
pub mod validate;

use error::MemoError;
use response::ApiError;

pub const V1_PREFIX: &str = "/data/1";
pub const MEMO: &str = "/memo";

pub struct AppState {
    pub manager: manager::MemoManager,
}

impl AppState {
    pub fn new(manager: manager::MemoManager) -> Self {
        Self { manager }
    }
}

/// Registers the memo routes and extractor error handlers.
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.app_data(actix_web::web::JsonConfig::default().error_handler(|err, req| {
        ApiError::new(MemoError::Validation(err.to_string()), req).into()
    }))
    .app_data(actix_web::web::QueryConfig::default().error_handler(|err, req| {
        ApiError::new(MemoError::InvalidArgument(err.to_string()), req).into()
    }))
    .app_data(actix_web::web::PathConfig::default().error_handler(|err, req| {
        ApiError::new(MemoError::NotFound(err.to_string()), req).into()
    }))
    .service(
        actix_web::web::scope(&format!("{}{}", V1_PREFIX, MEMO))
            .route("", actix_web::web::get().to(memo::index))
            .route("", actix_web::web::post().to(memo::create))
            .route("/{id}", actix_web::web::get().to(memo::get))
            .route("/{id}", actix_web::web::put().to(memo::update))
            .route("/{id}", actix_web::web::delete().to(memo::delete)),
    )
    .service(
        actix_web::web::resource("/hello")
            .route(actix_web::web::get().to(memo::hello))
            .route(actix_web::web::head().to(memo::hello)),
    );
}
