use actix_web::HttpResponse;
use serde_json::json;

/// GET /
///
/// Welcome message and a map of the available endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message and endpoint map")),
    tag = "meta"
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the sample API",
        "endpoints": {
            "GET /customers": "List all customers",
            "GET /customers/{cust_code}": "Get a customer by code",
            "GET /customers/{cust_code}/orders": "List the orders of a customer",
            "POST /customers": "Create a customer",
            "PATCH /customers/{cust_code}": "Update some fields of a customer",
            "PUT /customers/{cust_code}": "Replace every field of a customer",
            "DELETE /customers/{cust_code}": "Delete a customer",
            "GET /orders/{ord_num}": "Get an order by number",
            "POST /orders": "Create an order",
            "GET /products": "List all products",
            "POST /products": "Create a product",
            "GET /product-types": "List distinct product types",
            "GET /api-docs/": "Interactive API documentation",
        }
    }))
}
