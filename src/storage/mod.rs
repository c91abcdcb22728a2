//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - customer(name, fullname, email_addresses, address, country_code)
//! - credit_card(customer_id, number) - unique per customer
//! - product(name, price, description, category)
//! - "order"(customer_id, product_id, quantity)
//!
//! All connection lifecycle, schema creation, transactional inserts and
//! declarative queries go through [`SqliteStore`]; nothing else in the
//! crate touches the database directly.

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, StoreStats};
