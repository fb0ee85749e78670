use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::customer::{Customer, CustomerChanges};
use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::schema::{customer, foods, orders};

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub cust_code: String,
    pub cust_name: String,
    pub working_area: String,
    pub cust_country: String,
    pub opening_amt: BigDecimal,
    pub receive_amt: BigDecimal,
    pub payment_amt: BigDecimal,
    pub outstanding_amt: BigDecimal,
    pub phone_no: String,
}

/// `None` fields are left out of the generated `SET` clause.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = customer)]
pub struct CustomerChangesetRow {
    pub cust_name: Option<String>,
    pub working_area: Option<String>,
    pub cust_country: Option<String>,
    pub opening_amt: Option<BigDecimal>,
    pub receive_amt: Option<BigDecimal>,
    pub payment_amt: Option<BigDecimal>,
    pub outstanding_amt: Option<BigDecimal>,
    pub phone_no: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub ord_num: i64,
    pub ord_amount: BigDecimal,
    pub advance_amount: BigDecimal,
    pub ord_date: NaiveDate,
    pub cust_code: String,
    pub agent_code: String,
    pub ord_description: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = foods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FoodRow {
    pub item_id: String,
    pub item_name: String,
    pub item_unit: String,
    pub company_id: String,
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        Customer {
            cust_code: r.cust_code,
            cust_name: r.cust_name,
            working_area: r.working_area,
            cust_country: r.cust_country,
            opening_amt: r.opening_amt,
            receive_amt: r.receive_amt,
            payment_amt: r.payment_amt,
            outstanding_amt: r.outstanding_amt,
            phone_no: r.phone_no,
        }
    }
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        CustomerRow {
            cust_code: c.cust_code,
            cust_name: c.cust_name,
            working_area: c.working_area,
            cust_country: c.cust_country,
            opening_amt: c.opening_amt,
            receive_amt: c.receive_amt,
            payment_amt: c.payment_amt,
            outstanding_amt: c.outstanding_amt,
            phone_no: c.phone_no,
        }
    }
}

impl From<CustomerChanges> for CustomerChangesetRow {
    fn from(c: CustomerChanges) -> Self {
        CustomerChangesetRow {
            cust_name: c.cust_name,
            working_area: c.working_area,
            cust_country: c.cust_country,
            opening_amt: c.opening_amt,
            receive_amt: c.receive_amt,
            payment_amt: c.payment_amt,
            outstanding_amt: c.outstanding_amt,
            phone_no: c.phone_no,
        }
    }
}

impl From<OrderRow> for Order {
    fn from(r: OrderRow) -> Self {
        Order {
            ord_num: r.ord_num,
            ord_amount: r.ord_amount,
            advance_amount: r.advance_amount,
            ord_date: r.ord_date,
            cust_code: r.cust_code,
            agent_code: r.agent_code,
            ord_description: r.ord_description,
        }
    }
}

impl From<Order> for OrderRow {
    fn from(o: Order) -> Self {
        OrderRow {
            ord_num: o.ord_num,
            ord_amount: o.ord_amount,
            advance_amount: o.advance_amount,
            ord_date: o.ord_date,
            cust_code: o.cust_code,
            agent_code: o.agent_code,
            ord_description: o.ord_description,
        }
    }
}

impl From<FoodRow> for Product {
    fn from(r: FoodRow) -> Self {
        Product {
            item_id: r.item_id,
            item_name: r.item_name,
            item_unit: r.item_unit,
            company_id: r.company_id,
        }
    }
}

impl From<Product> for FoodRow {
    fn from(p: Product) -> Self {
        FoodRow {
            item_id: p.item_id,
            item_name: p.item_name,
            item_unit: p.item_unit,
            company_id: p.company_id,
        }
    }
}
