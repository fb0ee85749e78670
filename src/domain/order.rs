use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `orders` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Order {
    pub ord_num: i64,
    #[schema(value_type = String, example = "1000.00")]
    pub ord_amount: BigDecimal,
    #[schema(value_type = String, example = "600.00")]
    pub advance_amount: BigDecimal,
    pub ord_date: NaiveDate,
    pub cust_code: String,
    pub agent_code: String,
    pub ord_description: Option<String>,
}
