use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::Product;
use crate::schema::foods;

use super::models::FoodRow;

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn list(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = foods::table
            .select(FoodRow::as_select())
            .order(foods::item_id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn create(&self, product: Product) -> Result<String, DomainError> {
        let mut conn = self.pool.get()?;

        let row = FoodRow::from(product);
        diesel::insert_into(foods::table)
            .values(&row)
            .execute(&mut conn)?;

        Ok(row.item_id)
    }

    fn distinct_types(&self) -> Result<Vec<String>, DomainError> {
        let mut conn = self.pool.get()?;

        let units = foods::table
            .select(foods::item_unit)
            .distinct()
            .order(foods::item_unit.asc())
            .load::<String>(&mut conn)?;

        Ok(units)
    }
}
