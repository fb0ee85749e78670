use utoipa::OpenApi;

use crate::domain::customer::Customer;
use crate::domain::order::Order;
use crate::domain::product::{Product, ProductType};
use crate::errors::{ErrorResponse, ValidationErrorResponse};
use crate::handlers;
use crate::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sample API",
        description = "CRUD access to the customer, orders and foods tables"
    ),
    paths(
        handlers::index::index,
        handlers::customers::list_customers,
        handlers::customers::get_customer,
        handlers::customers::get_customer_orders,
        handlers::customers::create_customer,
        handlers::customers::patch_customer,
        handlers::customers::replace_customer,
        handlers::customers::delete_customer,
        handlers::orders::get_order,
        handlers::orders::create_order,
        handlers::products::list_products,
        handlers::products::create_product,
        handlers::products::list_product_types,
    ),
    components(schemas(
        Customer,
        Order,
        Product,
        ProductType,
        FieldError,
        ErrorResponse,
        ValidationErrorResponse,
        handlers::CreatedResponse,
        handlers::MessageResponse,
        handlers::customers::CreateCustomerRequest,
        handlers::customers::ReplaceCustomerRequest,
        handlers::customers::PatchCustomerRequest,
        handlers::orders::CreateOrderRequest,
        handlers::products::CreateProductRequest,
    )),
    tags(
        (name = "customers", description = "Customer records"),
        (name = "orders", description = "Order records"),
        (name = "products", description = "Product records, stored as foods"),
        (name = "meta", description = "Service information"),
    )
)]
pub struct ApiDoc;
