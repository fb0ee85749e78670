use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::{Customer, CustomerChanges};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customer;

use super::models::{CustomerChangesetRow, CustomerRow};

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = customer::table
            .select(CustomerRow::as_select())
            .order(customer::cust_code.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customer::table
            .find(code)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn create(&self, new_customer: Customer) -> Result<String, DomainError> {
        let mut conn = self.pool.get()?;

        let row = CustomerRow::from(new_customer);
        diesel::insert_into(customer::table)
            .values(&row)
            .execute(&mut conn)?;

        Ok(row.cust_code)
    }

    fn update(&self, code: &str, changes: CustomerChanges) -> Result<(), DomainError> {
        // Diesel refuses an empty SET clause; catch it before touching the pool.
        if changes.is_empty() {
            return Err(DomainError::InvalidInput(
                "No valid fields to update".to_string(),
            ));
        }
        let mut conn = self.pool.get()?;

        let affected = diesel::update(customer::table.find(code))
            .set(&CustomerChangesetRow::from(changes))
            .execute(&mut conn)?;

        match affected {
            0 => Err(DomainError::NotFound("Customer")),
            _ => Ok(()),
        }
    }

    fn delete(&self, code: &str) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(customer::table.find(code)).execute(&mut conn)?;

        match affected {
            0 => Err(DomainError::NotFound("Customer")),
            _ => Ok(()),
        }
    }
}
