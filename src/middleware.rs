use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::{header, Method};
use actix_web::middleware::Next;
use actix_web::{Error, ResponseError};

use crate::errors::AppError;

/// Path prefix served by the documentation UI, which is exempt from the check.
pub const DOCS_PREFIX: &str = "/api-docs";

/// Reject body-carrying requests whose `Content-Type` is not JSON.
pub async fn require_json(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    if carries_body(req.method()) && !req.path().starts_with(DOCS_PREFIX) && !is_json(&req) {
        log::debug!("Rejecting {} {} without JSON body", req.method(), req.path());
        let response = AppError::UnsupportedMediaType.error_response();
        return Ok(req.into_response(response));
    }

    next.call(req).await.map(ServiceResponse::map_into_boxed_body)
}

fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

fn is_json(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}
