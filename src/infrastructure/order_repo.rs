use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;
use crate::schema::orders;

use super::models::OrderRow;

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn find_by_number(&self, ord_num: i64) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = orders::table
            .find(ord_num)
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Order::from))
    }

    fn find_by_customer(&self, cust_code: &str) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .filter(orders::cust_code.eq(cust_code))
            .select(OrderRow::as_select())
            .order(orders::ord_num.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn create(&self, order: Order) -> Result<i64, DomainError> {
        let mut conn = self.pool.get()?;

        let row = OrderRow::from(order);
        diesel::insert_into(orders::table)
            .values(&row)
            .execute(&mut conn)?;

        Ok(row.ord_num)
    }
}
