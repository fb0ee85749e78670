use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::customer::{Customer, CustomerChanges};
use crate::domain::order::Order;
use crate::domain::ports::{CustomerRepository, OrderRepository};
use crate::errors::{AppError, ErrorResponse, ValidationErrorResponse};
use crate::validation::{self, amount, not_blank};

use super::{CreatedResponse, MessageResponse};

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

// ── Request DTOs ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Path)]
pub struct CustomerPath {
    /// Customer code, 1 to 6 characters
    #[validate(length(min = 1, max = 6, message = "must be between 1 and 6 characters"))]
    pub cust_code: String,
}

/// New customer. Only the code and name are required; amounts accept JSON
/// numbers or numeric strings.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreateCustomerRequest {
    #[schema(example = "C001")]
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 6, message = "must be between 1 and 6 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub cust_code: Option<String>,
    #[schema(example = "Acme")]
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 40, message = "must be between 1 and 40 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub cust_name: Option<String>,
    #[validate(length(max = 35, message = "must be at most 35 characters"))]
    pub working_area: Option<String>,
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub cust_country: Option<String>,
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "amount"))]
    pub opening_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "amount"))]
    pub receive_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "amount"))]
    pub payment_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "amount"))]
    pub outstanding_amt: Option<Value>,
    #[validate(length(max = 17, message = "must be at most 17 characters"))]
    pub phone_no: Option<String>,
}

impl CreateCustomerRequest {
    /// Build the stored record, filling omitted optional columns with defaults.
    fn into_customer(self) -> Customer {
        Customer {
            cust_code: trimmed(self.cust_code).unwrap_or_default(),
            cust_name: trimmed(self.cust_name).unwrap_or_default(),
            working_area: self.working_area.unwrap_or_else(|| UNKNOWN.to_string()),
            cust_country: self.cust_country.unwrap_or_else(|| UNKNOWN.to_string()),
            opening_amt: decimal(self.opening_amt).unwrap_or_default(),
            receive_amt: decimal(self.receive_amt).unwrap_or_default(),
            payment_amt: decimal(self.payment_amt).unwrap_or_default(),
            outstanding_amt: decimal(self.outstanding_amt).unwrap_or_default(),
            phone_no: self.phone_no.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// Full replacement: every mutable column is required.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ReplaceCustomerRequest {
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 40, message = "must be between 1 and 40 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub cust_name: Option<String>,
    #[validate(required(message = "is required"))]
    #[validate(length(max = 35, message = "must be at most 35 characters"))]
    pub working_area: Option<String>,
    #[validate(required(message = "is required"))]
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub cust_country: Option<String>,
    #[schema(value_type = Option<f64>)]
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "amount"))]
    pub opening_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "amount"))]
    pub receive_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "amount"))]
    pub payment_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(required(message = "is required"))]
    #[validate(custom(function = "amount"))]
    pub outstanding_amt: Option<Value>,
    #[validate(required(message = "is required"))]
    #[validate(length(max = 17, message = "must be at most 17 characters"))]
    pub phone_no: Option<String>,
}

impl ReplaceCustomerRequest {
    fn into_changes(self) -> CustomerChanges {
        CustomerChanges {
            cust_name: trimmed(self.cust_name),
            working_area: self.working_area,
            cust_country: self.cust_country,
            opening_amt: decimal(self.opening_amt),
            receive_amt: decimal(self.receive_amt),
            payment_amt: decimal(self.payment_amt),
            outstanding_amt: decimal(self.outstanding_amt),
            phone_no: self.phone_no,
        }
    }
}

/// Partial update: any subset of the mutable columns.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PatchCustomerRequest {
    #[validate(length(min = 1, max = 40, message = "must be between 1 and 40 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub cust_name: Option<String>,
    #[validate(length(max = 35, message = "must be at most 35 characters"))]
    pub working_area: Option<String>,
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub cust_country: Option<String>,
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "amount"))]
    pub opening_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "amount"))]
    pub receive_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "amount"))]
    pub payment_amt: Option<Value>,
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "amount"))]
    pub outstanding_amt: Option<Value>,
    #[validate(length(max = 17, message = "must be at most 17 characters"))]
    pub phone_no: Option<String>,
}

impl PatchCustomerRequest {
    fn into_changes(self) -> CustomerChanges {
        CustomerChanges {
            cust_name: trimmed(self.cust_name),
            working_area: self.working_area,
            cust_country: self.cust_country,
            opening_amt: decimal(self.opening_amt),
            receive_amt: decimal(self.receive_amt),
            payment_amt: decimal(self.payment_amt),
            outstanding_amt: decimal(self.outstanding_amt),
            phone_no: self.phone_no,
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string())
}

fn decimal(value: Option<Value>) -> Option<BigDecimal> {
    value.as_ref().and_then(validation::to_decimal)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /customers
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "All customers", body = [Customer]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "customers"
)]
pub async fn list_customers(
    repo: web::Data<dyn CustomerRepository>,
) -> Result<HttpResponse, AppError> {
    let customers = web::block(move || repo.list())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(customers))
}

/// GET /customers/{cust_code}
#[utoipa::path(
    get,
    path = "/customers/{cust_code}",
    params(CustomerPath),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 400, description = "Invalid customer code", body = ValidationErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    repo: web::Data<dyn CustomerRepository>,
    path: web::Path<CustomerPath>,
) -> Result<HttpResponse, AppError> {
    validation::check(&*path)?;
    let code = path.into_inner().cust_code;

    let customer = web::block(move || repo.find_by_code(&code))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match customer {
        Some(customer) => Ok(HttpResponse::Ok().json(customer)),
        None => Err(AppError::NotFound("Customer not found".to_string())),
    }
}

/// GET /customers/{cust_code}/orders
///
/// An empty result is reported as 404.
#[utoipa::path(
    get,
    path = "/customers/{cust_code}/orders",
    params(CustomerPath),
    responses(
        (status = 200, description = "Orders placed by the customer", body = [Order]),
        (status = 400, description = "Invalid customer code", body = ValidationErrorResponse),
        (status = 404, description = "No orders for this customer", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "customers"
)]
pub async fn get_customer_orders(
    repo: web::Data<dyn OrderRepository>,
    path: web::Path<CustomerPath>,
) -> Result<HttpResponse, AppError> {
    validation::check(&*path)?;
    let code = path.into_inner().cust_code;

    let orders = web::block(move || repo.find_by_customer(&code))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    if orders.is_empty() {
        return Err(AppError::NotFound(
            "No orders found for this customer".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(orders))
}

/// POST /customers
///
/// Omitted optional columns default to "Unknown" (area, country), "N/A"
/// (phone) and 0 (amounts).
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CreatedResponse),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 500, description = "Storage failure or duplicate code", body = ErrorResponse),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    repo: web::Data<dyn CustomerRepository>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    validation::check(&body)?;
    let customer = body.into_customer();

    let code = web::block(move || repo.create(customer))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreatedResponse::new("Customer", code)))
}

/// PATCH /customers/{cust_code}
#[utoipa::path(
    patch,
    path = "/customers/{cust_code}",
    params(CustomerPath),
    request_body = PatchCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = MessageResponse),
        (status = 400, description = "Invalid input or no updatable field", body = ValidationErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "customers"
)]
pub async fn patch_customer(
    repo: web::Data<dyn CustomerRepository>,
    path: web::Path<CustomerPath>,
    body: web::Json<PatchCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    validation::check(&*path)?;
    let body = body.into_inner();
    validation::check(&body)?;

    let changes = body.into_changes();
    if changes.is_empty() {
        return Err(AppError::Validation(vec![validation::FieldError::new(
            "body",
            "No valid fields to update",
        )]));
    }
    let code = path.into_inner().cust_code;

    web::block(move || repo.update(&code, changes))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Customer updated")))
}

/// PUT /customers/{cust_code}
#[utoipa::path(
    put,
    path = "/customers/{cust_code}",
    params(CustomerPath),
    request_body = ReplaceCustomerRequest,
    responses(
        (status = 200, description = "Customer replaced", body = MessageResponse),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "customers"
)]
pub async fn replace_customer(
    repo: web::Data<dyn CustomerRepository>,
    path: web::Path<CustomerPath>,
    body: web::Json<ReplaceCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    validation::check(&*path)?;
    let body = body.into_inner();
    validation::check(&body)?;

    let changes = body.into_changes();
    let code = path.into_inner().cust_code;

    web::block(move || repo.update(&code, changes))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Customer updated")))
}

/// DELETE /customers/{cust_code}
#[utoipa::path(
    delete,
    path = "/customers/{cust_code}",
    params(CustomerPath),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 400, description = "Invalid customer code", body = ValidationErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    repo: web::Data<dyn CustomerRepository>,
    path: web::Path<CustomerPath>,
) -> Result<HttpResponse, AppError> {
    validation::check(&*path)?;
    let code = path.into_inner().cust_code;

    web::block(move || repo.delete(&code))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Customer deleted")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_request(body: Value) -> CreateCustomerRequest {
        serde_json::from_value(body).expect("valid request json")
    }

    #[test]
    fn create_fills_defaults_for_omitted_columns() {
        let req = create_request(json!({"CUST_CODE": "C001", "CUST_NAME": "  Acme  "}));
        assert!(validation::check(&req).is_ok());

        let customer = req.into_customer();
        assert_eq!(customer.cust_code, "C001");
        assert_eq!(customer.cust_name, "Acme");
        assert_eq!(customer.working_area, UNKNOWN);
        assert_eq!(customer.cust_country, UNKNOWN);
        assert_eq!(customer.phone_no, NOT_AVAILABLE);
        assert_eq!(customer.outstanding_amt, BigDecimal::from(0));
    }

    #[test]
    fn create_accepts_numeric_strings() {
        let req = create_request(json!({
            "CUST_CODE": "C002",
            "CUST_NAME": "Holmes",
            "OPENING_AMT": "6000.00",
            "RECEIVE_AMT": 5000,
        }));
        assert!(validation::check(&req).is_ok());

        let customer = req.into_customer();
        assert_eq!(customer.opening_amt, BigDecimal::from(6000));
        assert_eq!(customer.receive_amt, BigDecimal::from(5000));
    }

    #[test]
    fn create_reports_all_missing_fields() {
        let errors = validation::check(&create_request(json!({}))).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["CUST_CODE", "CUST_NAME"]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let req = create_request(json!({"CUST_CODE": "C001", "CUST_NAME": "   "}));
        let errors = validation::check(&req).unwrap_err();
        assert!(errors.iter().all(|e| e.field == "CUST_NAME"));
    }

    #[test]
    fn blank_code_is_rejected_and_padding_trimmed() {
        let errors =
            validation::check(&create_request(json!({"CUST_CODE": "   ", "CUST_NAME": "Acme"})))
                .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "CUST_CODE must not be empty");

        let req = create_request(json!({"CUST_CODE": " C1 ", "CUST_NAME": "Acme"}));
        assert!(validation::check(&req).is_ok());
        assert_eq!(req.into_customer().cust_code, "C1");
    }

    #[test]
    fn amounts_beyond_column_precision_are_rejected() {
        let req = create_request(json!({
            "CUST_CODE": "C001",
            "CUST_NAME": "Acme",
            "OPENING_AMT": 12.345,
            "PAYMENT_AMT": "12345678901",
        }));
        let errors = validation::check(&req).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["OPENING_AMT", "PAYMENT_AMT"]);
    }

    #[test]
    fn replace_requires_every_mutable_field() {
        let req: ReplaceCustomerRequest =
            serde_json::from_value(json!({"CUST_NAME": "Acme"})).expect("json");
        let errors = validation::check(&req).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert!(!errors.iter().any(|e| e.field == "CUST_NAME"));
    }

    #[test]
    fn patch_with_unknown_keys_has_no_changes() {
        let req: PatchCustomerRequest =
            serde_json::from_value(json!({"NICKNAME": "Ace"})).expect("json");
        assert!(validation::check(&req).is_ok());
        assert!(req.into_changes().is_empty());
    }

    #[test]
    fn customer_path_is_length_bounded() {
        let too_long = CustomerPath {
            cust_code: "C000001".to_string(),
        };
        let ok = CustomerPath {
            cust_code: "C001".to_string(),
        };
        assert!(validation::check(&too_long).is_err());
        assert!(validation::check(&ok).is_ok());
    }
}
