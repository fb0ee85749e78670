use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `foods` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Product {
    pub item_id: String,
    pub item_name: String,
    pub item_unit: String,
    pub company_id: String,
}

/// One distinct `item_unit` value, relabeled for the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductType {
    #[serde(rename = "PRODUCT_TYPE")]
    pub product_type: String,
}
