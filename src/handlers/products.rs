use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductType};
use crate::errors::{AppError, ErrorResponse, ValidationErrorResponse};
use crate::validation::{self, not_blank};

use super::CreatedResponse;

/// Every column is required. Values are trimmed before storage.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreateProductRequest {
    #[schema(example = "1")]
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 6, message = "must be between 1 and 6 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub item_id: Option<String>,
    #[schema(example = "Chex Mix")]
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 40, message = "must be between 1 and 40 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub item_name: Option<String>,
    #[schema(example = "Pcs")]
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 10, message = "must be between 1 and 10 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub item_unit: Option<String>,
    #[schema(example = "16")]
    #[validate(required(message = "is required"))]
    #[validate(length(min = 1, max = 6, message = "must be between 1 and 6 characters"))]
    #[validate(custom(function = "not_blank"))]
    pub company_id: Option<String>,
}

impl CreateProductRequest {
    fn into_product(self) -> Product {
        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).unwrap_or_default();
        Product {
            item_id: clean(self.item_id),
            item_name: clean(self.item_name),
            item_unit: clean(self.item_unit),
            company_id: clean(self.company_id),
        }
    }
}

/// GET /products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "products"
)]
pub async fn list_products(
    repo: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, AppError> {
    let products = web::block(move || repo.list())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(products))
}

/// POST /products
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 400, description = "Invalid input", body = ValidationErrorResponse),
        (status = 500, description = "Storage failure or duplicate id", body = ErrorResponse),
    ),
    tag = "products"
)]
pub async fn create_product(
    repo: web::Data<dyn ProductRepository>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    validation::check(&body)?;
    let product = body.into_product();

    let item_id = web::block(move || repo.create(product))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreatedResponse::new("Product", item_id)))
}

/// GET /product-types
///
/// Distinct `ITEM_UNIT` values, relabeled as `PRODUCT_TYPE`.
#[utoipa::path(
    get,
    path = "/product-types",
    responses(
        (status = 200, description = "Distinct product types", body = [ProductType]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "products"
)]
pub async fn list_product_types(
    repo: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, AppError> {
    let units = web::block(move || repo.distinct_types())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let types: Vec<ProductType> = units
        .into_iter()
        .map(|product_type| ProductType { product_type })
        .collect();
    Ok(HttpResponse::Ok().json(types))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn every_field_is_required() {
        let req: CreateProductRequest = serde_json::from_value(json!({})).expect("json");
        let errors = validation::check(&req).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["COMPANY_ID", "ITEM_ID", "ITEM_NAME", "ITEM_UNIT"]);
    }

    #[test]
    fn whitespace_only_values_are_rejected() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "ITEM_ID": "1",
            "ITEM_NAME": "  ",
            "ITEM_UNIT": "Pcs",
            "COMPANY_ID": "16",
        }))
        .expect("json");

        let errors = validation::check(&req).unwrap_err();
        assert!(errors.iter().all(|e| e.field == "ITEM_NAME"));
    }

    #[test]
    fn values_are_trimmed() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "ITEM_ID": " 1 ",
            "ITEM_NAME": "Chex Mix",
            "ITEM_UNIT": "Pcs ",
            "COMPANY_ID": "16",
        }))
        .expect("json");
        assert!(validation::check(&req).is_ok());

        let product = req.into_product();
        assert_eq!(product.item_id, "1");
        assert_eq!(product.item_unit, "Pcs");
    }
}
