use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `customer` table. `cust_code` is assigned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Customer {
    pub cust_code: String,
    pub cust_name: String,
    pub working_area: String,
    pub cust_country: String,
    #[schema(value_type = String, example = "0.00")]
    pub opening_amt: BigDecimal,
    #[schema(value_type = String, example = "0.00")]
    pub receive_amt: BigDecimal,
    #[schema(value_type = String, example = "0.00")]
    pub payment_amt: BigDecimal,
    #[schema(value_type = String, example = "0.00")]
    pub outstanding_amt: BigDecimal,
    pub phone_no: String,
}

/// The mutable part of a customer. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerChanges {
    pub cust_name: Option<String>,
    pub working_area: Option<String>,
    pub cust_country: Option<String>,
    pub opening_amt: Option<BigDecimal>,
    pub receive_amt: Option<BigDecimal>,
    pub payment_amt: Option<BigDecimal>,
    pub outstanding_amt: Option<BigDecimal>,
    pub phone_no: Option<String>,
}

impl CustomerChanges {
    pub fn is_empty(&self) -> bool {
        self.cust_name.is_none()
            && self.working_area.is_none()
            && self.cust_country.is_none()
            && self.opening_amt.is_none()
            && self.receive_amt.is_none()
            && self.payment_amt.is_none()
            && self.outstanding_amt.is_none()
            && self.phone_no.is_none()
    }
}
