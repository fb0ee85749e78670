//! In-memory repositories for exercising the HTTP layer without a database.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use sample_api::domain::customer::{Customer, CustomerChanges};
use sample_api::domain::errors::DomainError;
use sample_api::domain::order::Order;
use sample_api::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use sample_api::domain::product::Product;
use sample_api::Repositories;

/// One store backing all three repositories. `calls` counts every storage
/// access so tests can assert that rejected requests never reached it.
#[derive(Default)]
pub struct InMemoryStore {
    customers: Mutex<BTreeMap<String, Customer>>,
    orders: Mutex<BTreeMap<i64, Order>>,
    products: Mutex<BTreeMap<String, Product>>,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn duplicate(table: &str) -> DomainError {
    DomainError::Internal(format!(
        "duplicate key value violates unique constraint \"{}_pkey\"",
        table
    ))
}

/// Overwrite the supplied fields of `customer`, as the SQL `UPDATE` does.
fn apply(changes: CustomerChanges, customer: &mut Customer) {
    if let Some(v) = changes.cust_name {
        customer.cust_name = v;
    }
    if let Some(v) = changes.working_area {
        customer.working_area = v;
    }
    if let Some(v) = changes.cust_country {
        customer.cust_country = v;
    }
    if let Some(v) = changes.opening_amt {
        customer.opening_amt = v;
    }
    if let Some(v) = changes.receive_amt {
        customer.receive_amt = v;
    }
    if let Some(v) = changes.payment_amt {
        customer.payment_amt = v;
    }
    if let Some(v) = changes.outstanding_amt {
        customer.outstanding_amt = v;
    }
    if let Some(v) = changes.phone_no {
        customer.phone_no = v;
    }
}

impl CustomerRepository for InMemoryStore {
    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        self.touch();
        Ok(self.customers.lock().unwrap().values().cloned().collect())
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Customer>, DomainError> {
        self.touch();
        Ok(self.customers.lock().unwrap().get(code).cloned())
    }

    fn create(&self, customer: Customer) -> Result<String, DomainError> {
        self.touch();
        let mut customers = self.customers.lock().unwrap();
        if customers.contains_key(&customer.cust_code) {
            return Err(duplicate("customer"));
        }
        let code = customer.cust_code.clone();
        customers.insert(code.clone(), customer);
        Ok(code)
    }

    fn update(&self, code: &str, changes: CustomerChanges) -> Result<(), DomainError> {
        self.touch();
        let mut customers = self.customers.lock().unwrap();
        let customer = customers
            .get_mut(code)
            .ok_or(DomainError::NotFound("Customer"))?;
        apply(changes, customer);
        Ok(())
    }

    fn delete(&self, code: &str) -> Result<(), DomainError> {
        self.touch();
        self.customers
            .lock()
            .unwrap()
            .remove(code)
            .map(|_| ())
            .ok_or(DomainError::NotFound("Customer"))
    }
}

impl OrderRepository for InMemoryStore {
    fn find_by_number(&self, ord_num: i64) -> Result<Option<Order>, DomainError> {
        self.touch();
        Ok(self.orders.lock().unwrap().get(&ord_num).cloned())
    }

    fn find_by_customer(&self, cust_code: &str) -> Result<Vec<Order>, DomainError> {
        self.touch();
        Ok(self
            .orders
            .lock()
            .unwrap()
            .values()
            .filter(|o| o.cust_code == cust_code)
            .cloned()
            .collect())
    }

    fn create(&self, order: Order) -> Result<i64, DomainError> {
        self.touch();
        let mut orders = self.orders.lock().unwrap();
        if orders.contains_key(&order.ord_num) {
            return Err(duplicate("orders"));
        }
        let num = order.ord_num;
        orders.insert(num, order);
        Ok(num)
    }
}

impl ProductRepository for InMemoryStore {
    fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.touch();
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    fn create(&self, product: Product) -> Result<String, DomainError> {
        self.touch();
        let mut products = self.products.lock().unwrap();
        if products.contains_key(&product.item_id) {
            return Err(duplicate("foods"));
        }
        let id = product.item_id.clone();
        products.insert(id.clone(), product);
        Ok(id)
    }

    fn distinct_types(&self) -> Result<Vec<String>, DomainError> {
        self.touch();
        let mut units: Vec<String> = self
            .products
            .lock()
            .unwrap()
            .values()
            .map(|p| p.item_unit.clone())
            .collect();
        units.sort();
        units.dedup();
        Ok(units)
    }
}

pub fn repositories(store: &Arc<InMemoryStore>) -> Repositories {
    Repositories::new(store.clone(), store.clone(), store.clone())
}
