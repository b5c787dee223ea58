mod application;
mod domain;
mod infrastructure;

use axum::{
    http::header::HeaderName,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use application::removal_service::RemovalService;
use infrastructure::axum_handler::{
    download_image_handler, fetch_image_handler, preview_image_handler, upload_image_handler,
    AppState,
};
use infrastructure::file_storage::LocalFileStorage;
use infrastructure::image_processor::DefaultImageProcessor;

#[tokio::main]
async fn main() {
    let removal_service = Arc::new(RemovalService::new(Arc::new(DefaultImageProcessor::new())));
    let state = Arc::new(AppState {
        removal_service,
        file_storage: Arc::new(LocalFileStorage::new()),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(vec![HeaderName::from_static("content-type")]);

    let app = Router::new()
        .nest_service("/", ServeDir::new("frontend/build"))
        .route("/upload", post(upload_image_handler))
        .route("/preview", get(preview_image_handler))
        .route("/download", get(download_image_handler))
        .route("/fetch", post(fetch_image_handler))
        .layer(cors)
        .with_state(state);

    axum::Server::bind(&"0.0.0.0:3300".parse().unwrap())
        .serve(app.into_make_service())
        .await
        .unwrap();
}
