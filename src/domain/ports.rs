use super::customer::{Customer, CustomerChanges};
use super::errors::DomainError;
use super::order::Order;
use super::product::Product;

/// Each method runs a single statement on one pooled connection.
pub trait CustomerRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Customer>, DomainError>;
    fn find_by_code(&self, code: &str) -> Result<Option<Customer>, DomainError>;
    fn create(&self, customer: Customer) -> Result<String, DomainError>;
    /// Fails with `DomainError::NotFound` when no row has `code`.
    fn update(&self, code: &str, changes: CustomerChanges) -> Result<(), DomainError>;
    /// Fails with `DomainError::NotFound` when no row has `code`.
    fn delete(&self, code: &str) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn find_by_number(&self, ord_num: i64) -> Result<Option<Order>, DomainError>;
    fn find_by_customer(&self, cust_code: &str) -> Result<Vec<Order>, DomainError>;
    fn create(&self, order: Order) -> Result<i64, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Product>, DomainError>;
    fn create(&self, product: Product) -> Result<String, DomainError>;
    fn distinct_types(&self) -> Result<Vec<String>, DomainError>;
}
