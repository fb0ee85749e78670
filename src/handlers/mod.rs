pub mod customers;
pub mod index;
pub mod orders;
pub mod products;

use actix_web::{error, web, HttpRequest};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::validation::FieldError;

/// Body of every 201 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    pub id: Value,
}

impl CreatedResponse {
    pub fn new(entity: &str, id: impl Into<Value>) -> Self {
        Self {
            message: format!("{} created", entity),
            id: id.into(),
        }
    }
}

/// Undecodable bodies surface as a field error on `body`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::Validation(vec![FieldError::new("body", err.to_string())]).into()
    })
}

/// Unparsable path segments surface as a field error on `path`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        AppError::Validation(vec![FieldError::new("path", err.to_string())]).into()
    })
}

/// Body of 200 responses to mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
