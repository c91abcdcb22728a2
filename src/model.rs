//! Row types for the storefront schema.
//!
//! Each struct mirrors one table. Relationships are plain foreign-key
//! fields resolved by query-time joins; rows never carry in-memory
//! back-references to their related rows.

use serde::{Deserialize, Serialize};

/// Upper bound on `Customer::name` and `Product::name`/`category`
pub const NAME_MAX: usize = 100;

/// Upper bound on `CreditCard::number`
pub const CARD_NUMBER_MAX: usize = 19;

/// A customer row. Owns zero-or-one credit card and zero-or-more orders,
/// both expressed through foreign keys on the owning side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Surrogate id assigned by the store on insert
    pub id: i64,
    pub name: String,
    pub fullname: Option<String>,
    pub email_addresses: String,
    pub address: String,
    /// Two-letter uppercase country code
    pub country_code: String,
}

/// A credit card row. Exactly one owning customer; the store enforces
/// at most one card per customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: i64,
    pub customer_id: i64,
    pub number: String,
}

/// A product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

/// An order row linking a customer to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: u32,
}

/// Customer values for insertion (id assigned by the store)
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub fullname: Option<String>,
    pub email_addresses: String,
    pub address: String,
    pub country_code: String,
}

/// Product values for insertion
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

/// Order values for insertion
#[derive(Debug, Clone, Copy)]
pub struct NewOrder {
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: u32,
}

/// One row of the customers-per-country aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country_code: String,
    pub customers: i64,
}

/// One row of the customer/card inner join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCard {
    pub name: String,
    pub number: String,
}

/// One row of the orders-per-customer aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOrders {
    pub name: String,
    pub orders: i64,
}
