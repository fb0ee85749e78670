use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;
use crate::errors::{AppError, ErrorResponse, ValidationErrorResponse};
use crate::validation::{self, amount, integer, iso_date, not_blank};

use super::CreatedResponse;

// ── Request DTOs ─────────────────────────────────────────────────────────────

/// Non-numeric order numbers are rejected by the path extractor.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct OrderPath {
    /// Order number
    pub ord_num: i64,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreateOrderRequest {
    #[schema(value_type = Option<i64>, example = 200100)]
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "integer"))]
    pub ord_num: Option<Value>,
    #[schema(value_type = Option<f64>, example = 1000.0)]
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "amount"))]
    pub ord_amount: Option<Value>,
    #[schema(value_type = Option<f64>, example = 600.0)]
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "amount"))]
    pub advance_amount: Option<Value>,
    /// ISO-8601 date, e.g. `2008-08-01`
    #[schema(example = "2008-08-01")]
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "iso_date"))]
    pub ord_date: Option<String>,
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 6, message = "must be between 1 and 6 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub cust_code: Option<String>,
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 6, message = "must be between 1 and 6 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub agent_code: Option<String>,
    #[validate(length(max = 60, message = "must be at most 60 characters"))]
    pub ord_description: Option<String>,
}

impl CreateOrderRequest {
    fn into_order(self) -> Order {
        let decimal = |v: Option<Value>| {
            v.as_ref()
                .and_then(validation::to_decimal)
                .unwrap_or_default()
        };
        Order {
            ord_num: self
                .ord_num
                .as_ref()
                .and_then(validation::to_integer)
                .unwrap_or_default(),
            ord_amount: decimal(self.ord_amount),
            advance_amount: decimal(self.advance_amount),
            ord_date: self
                .ord_date
                .as_deref()
                .and_then(validation::parse_iso_date)
                .unwrap_or_default(),
            cust_code: trimmed(self.cust_code),
            agent_code: trimmed(self.agent_code),
            ord_description: self.ord_description,
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders/{ord_num}
#[utoipa::path(
    get,
    path = "/orders/{ord_num}",
    params(OrderPath),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 400, description = "Order number is not an integer", body = ValidationErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn get_order(
    repo: web::Data<dyn OrderRepository>,
    path: web::Path<OrderPath>,
) -> Result<HttpResponse, AppError> {
    let ord_num = path.into_inner().ord_num;

    let order = web::block(move || repo.find_by_number(ord_num))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match order {
        Some(order) => Ok(HttpResponse::Ok().json(order)),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}

/// POST /orders
///
/// The referenced customer is not checked here; the foreign key in storage
/// rejects unknown codes.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = CreatedResponse),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn create_order(
    repo: web::Data<dyn OrderRepository>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    validation::check(&body)?;
    let order = body.into_order();

    let ord_num = web::block(move || repo.create(order))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreatedResponse::new("Order", ord_num)))
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn request(body: Value) -> CreateOrderRequest {
        serde_json::from_value(body).expect("valid request json")
    }

    fn valid_body() -> Value {
        json!({
            "ORD_NUM": 200100,
            "ORD_AMOUNT": 1000,
            "ADVANCE_AMOUNT": "600.00",
            "ORD_DATE": "2008-08-01",
            "CUST_CODE": "C00013",
            "AGENT_CODE": "A003",
        })
    }

    #[test]
    fn valid_request_converts_to_order() {
        let req = request(valid_body());
        assert!(validation::check(&req).is_ok());

        let order = req.into_order();
        assert_eq!(order.ord_num, 200100);
        assert_eq!(order.ord_amount, BigDecimal::from(1000));
        assert_eq!(order.advance_amount, BigDecimal::from(600));
        assert_eq!(order.ord_date, NaiveDate::from_ymd_opt(2008, 8, 1).expect("date"));
        assert_eq!(order.ord_description, None);
    }

    #[test]
    fn non_iso_date_is_rejected() {
        let mut body = valid_body();
        body["ORD_DATE"] = json!("08/01/2008");

        let errors = validation::check(&request(body)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "ORD_DATE");
    }

    #[test]
    fn non_numeric_amounts_are_rejected() {
        let mut body = valid_body();
        body["ORD_AMOUNT"] = json!("a lot");
        body["ORD_NUM"] = json!("first");

        let errors = validation::check(&request(body)).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["ORD_AMOUNT", "ORD_NUM"]);
    }

    #[test]
    fn amounts_must_fit_numeric_12_2() {
        let mut body = valid_body();
        body["ORD_AMOUNT"] = json!(1e11);
        body["ADVANCE_AMOUNT"] = json!("600.001");

        let errors = validation::check(&request(body)).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["ADVANCE_AMOUNT", "ORD_AMOUNT"]);
    }

    #[test]
    fn missing_fields_are_itemized() {
        let errors = validation::check(&request(json!({}))).unwrap_err();
        assert_eq!(errors.len(), 6);
    }
}
