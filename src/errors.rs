use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::errors::DomainError;
use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of a 400 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Body of 404, 415 and 500 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(entity) => AppError::NotFound(format!("{} not found", entity)),
            DomainError::InvalidInput(msg) => {
                AppError::Validation(vec![FieldError::new("body", msg)])
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            AppError::Validation(errors) => builder.json(ValidationErrorResponse {
                errors: errors.clone(),
            }),
            AppError::NotFound(_) | AppError::UnsupportedMediaType => {
                builder.json(ErrorResponse {
                    error: self.to_string(),
                    details: None,
                })
            }
            AppError::Internal(msg) => {
                log::error!("Database error: {}", msg);
                builder.json(ErrorResponse {
                    error: "Database error".to_string(),
                    details: Some(msg.clone()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    async fn body_json(err: AppError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body())
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[test]
    fn validation_returns_400() {
        let err = AppError::Validation(vec![FieldError::new("CUST_CODE", "required")]);
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound("Customer not found".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unsupported_media_type_returns_415() {
        let resp = AppError::UnsupportedMediaType.error_response();
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn internal_error_exposes_raw_message() {
        let body = body_json(AppError::Internal("connection refused".to_string())).await;
        assert_eq!(body["error"], "Database error");
        assert_eq!(body["details"], "connection refused");
    }

    #[actix_web::test]
    async fn validation_lists_every_field() {
        let body = body_json(AppError::Validation(vec![
            FieldError::new("CUST_CODE", "CUST_CODE is required"),
            FieldError::new("CUST_NAME", "CUST_NAME is required"),
        ]))
        .await;

        let errors = body["errors"].as_array().expect("errors array");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["field"], "CUST_CODE");
        assert_eq!(errors[1]["message"], "CUST_NAME is required");
    }

    #[test]
    fn internal_error_display() {
        assert_eq!(
            AppError::Internal("msg".to_string()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::NotFound("Customer").into();
        assert!(matches!(app_err, AppError::NotFound(ref m) if m == "Customer not found"));
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }

    #[test]
    fn domain_invalid_input_maps_to_validation() {
        let app_err: AppError = DomainError::InvalidInput("bad value".to_string()).into();
        assert!(matches!(app_err, AppError::Validation(ref errs) if errs.len() == 1));
    }
}
