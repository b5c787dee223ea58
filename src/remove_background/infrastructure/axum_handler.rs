use crate::application::error::ApplicationError;
use axum::{
    body::Body,
    extract::{Json, Multipart, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::removal_service::RemovalService;
use crate::infrastructure::file_storage::LocalFileStorage;

// Keyed results are staged here so /preview and /download can serve them.
const OUTPUT_PATH: &str = "output.png";

#[derive(Clone)]
pub struct AppState {
    pub removal_service: Arc<RemovalService>,
    pub file_storage: Arc<LocalFileStorage>,
}

#[derive(Deserialize, Debug)]
pub struct FetchImageParams {
    pub url: String,
    #[serde(rename = "outputFormat")]
    pub output_format: Option<String>,
}

pub async fn upload_image_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApplicationError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApplicationError::RemovalFailed(format!("Multipart error: {}", e)))?
    {
        let data = field.bytes().await.map_err(|e| {
            ApplicationError::RemovalFailed(format!(
                "Failed to read bytes from multipart field: {}",
                e
            ))
        })?;

        let (processed_image_data, _content_type) = state
            .removal_service
            .remove_background(data.to_vec(), "png".to_string())
            .await?;

        state
            .file_storage
            .save_image(OUTPUT_PATH, &processed_image_data)
            .await?;
    }

    Ok("Image upload complete".to_string())
}

pub async fn preview_image_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApplicationError> {
    let image_data = state.file_storage.read_image(OUTPUT_PATH).await?;

    Response::builder()
        .header("Content-Type", "image/png")
        .body(Body::from(image_data))
        .map_err(|e| ApplicationError::RemovalFailed(format!("Failed to build preview response: {}", e)))
}

pub async fn download_image_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApplicationError> {
    let image_data = state.file_storage.read_image(OUTPUT_PATH).await?;

    Response::builder()
        .header("Content-Type", "image/png")
        .header("Content-Disposition", "attachment; filename=\"removed_background.png\"")
        .body(Body::from(image_data))
        .map_err(|e| ApplicationError::RemovalFailed(format!("Failed to build download response: {}", e)))
}

pub async fn fetch_image_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<FetchImageParams>,
) -> Result<impl IntoResponse, ApplicationError> {
    let desired_format = params.output_format.unwrap_or_else(|| "png".to_string());

    let (processed_image_data, content_type) = state
        .removal_service
        .remove_background_from_url(params.url, desired_format)
        .await?;

    Response::builder()
        .header("Content-Type", content_type)
        .body(Body::from(processed_image_data))
        .map_err(|e| ApplicationError::RemovalFailed(format!("Failed to build fetch response: {}", e)))
}
