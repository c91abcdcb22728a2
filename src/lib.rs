//! # Shopseed - Synthetic storefront database
//!
//! A seed-and-report utility over SQLite.
//!
//! Shopseed provides:
//! - A small relational schema: customers, credit cards, products, orders
//! - Locale-randomized synthetic data generation for seeding
//! - Transactional seeding with an explicit foreign-key policy
//! - A fixed set of read-only report queries (joins and aggregates)

pub mod config;
pub mod model;
pub mod report;
pub mod seed;
pub mod storage;
pub mod synth;
pub mod ui;

// Re-exports for convenient access
pub use model::{CountryCount, CreditCard, Customer, CustomerCard, CustomerOrders, Order, Product};
pub use seed::FkPolicy;
pub use storage::SqliteStore;
pub use synth::Generator;

/// Result type alias for Shopseed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Shopseed operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store could not be reached or opened
    #[error("Connection error: {0}")]
    Connection(String),

    /// Referential-integrity or uniqueness violation on insert
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Any other failure while executing a statement
    #[error("Query error: {0}")]
    Query(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;
        match &e {
            rusqlite::Error::SqliteFailure(err, _) => match err.code {
                ErrorCode::ConstraintViolation => Error::Constraint(e.to_string()),
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase => Error::Connection(e.to_string()),
                _ => Error::Query(e.to_string()),
            },
            _ => Error::Query(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_violations_map_to_constraint() {
        let store = SqliteStore::open_in_memory().unwrap();
        // credit card pointing at a customer that does not exist
        let err = store.insert_credit_card(999, "4111111111111111").unwrap_err();
        assert!(matches!(err, Error::Constraint(_)));
    }

    #[test]
    fn unreadable_path_maps_to_connection() {
        let err = SqliteStore::open(std::path::Path::new("/nonexistent/dir/shop.db")).unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }
}
