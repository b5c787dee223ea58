use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Background removal failed: {0}")]
    RemovalFailed(String),

    #[error("Domain error occurred: {0}")]
    DomainError(#[from] DomainError),

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[from] InfrastructureError),

    #[error("Underlying error: {source:?}")]
    AnyhowError {
        #[from]
        source: anyhow::Error,
    },
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApplicationError::RemovalFailed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApplicationError::DomainError(domain_err) => {
                (StatusCode::BAD_REQUEST, domain_err.to_string())
            }
            ApplicationError::InfrastructureError(infra_err) => {
                eprintln!("InfrastructureError: {:?}", infra_err);
                match infra_err {
                    InfrastructureError::ExternalApiError(_)
                    | InfrastructureError::ReqwestError(_) => {
                        (StatusCode::BAD_GATEWAY, infra_err.to_string())
                    }
                    InfrastructureError::DecodingError(_)
                    | InfrastructureError::Base64DecodeError(_) => {
                        (StatusCode::BAD_REQUEST, infra_err.to_string())
                    }
                    InfrastructureError::ImageLibError(_) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, infra_err.to_string())
                    }
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, infra_err.to_string()),
                }
            }
            ApplicationError::AnyhowError { source } => {
                eprintln!("Unhandled AnyhowError: {:?}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
