//! Seeding component - populates the store with synthetic rows.
//!
//! Each seeding pass runs inside a single transaction: either every row of
//! the pass becomes visible, or none do.
//!
//! The order-seeding path draws product ids from 1..=10 without consulting
//! the products actually present. What happens when a drawn id has no
//! matching product row is governed by [`FkPolicy`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{NewCustomer, NewOrder, NewProduct};
use crate::storage::SqliteStore;
use crate::synth::Generator;
use crate::{Error, Result};

/// Product ids for seeded orders are drawn uniformly from this range,
/// independent of how many products were actually created.
pub const PRODUCT_ID_RANGE: (u32, u32) = (1, 10);

/// Orders per customer and quantity per order are drawn from this range.
pub const ORDER_RANGE: (u32, u32) = (1, 10);

/// What to do when a seeded order draws a product id with no matching row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FkPolicy {
    /// Insert anyway; the store's foreign-key constraint rejects the row
    /// and the whole pass rolls back
    Reject,
    /// Skip the order row
    Ignore,
    /// Clamp the id into the range of existing product ids
    Clamp,
}

impl FkPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FkPolicy::Reject => "reject",
            FkPolicy::Ignore => "ignore",
            FkPolicy::Clamp => "clamp",
        }
    }
}

impl FromStr for FkPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(FkPolicy::Reject),
            "ignore" | "skip" => Ok(FkPolicy::Ignore),
            "clamp" => Ok(FkPolicy::Clamp),
            _ => Err(Error::Config(format!("Unknown fk policy: {s}"))),
        }
    }
}

impl std::fmt::Display for FkPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a customer-seeding pass inserted
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    pub customers: u32,
    pub credit_cards: u32,
    pub orders: u32,
    /// Order rows dropped by [`FkPolicy::Ignore`]
    pub orders_skipped: u32,
}

/// Insert `count` placeholder products in one transaction.
///
/// Names are `Product 0` .. `Product {count-1}`; price, description and
/// category are fixed.
pub fn seed_products(store: &mut SqliteStore, count: u32) -> Result<u32> {
    store.begin_transaction()?;
    let result = (|| {
        for i in 0..count {
            store.insert_product(&NewProduct {
                name: format!("Product {i}"),
                price: 9.99,
                description: "This is a product".to_string(),
                category: "Widgets".to_string(),
            })?;
        }
        Ok(count)
    })();

    finish(store, result)
}

/// Insert `count` customers in one transaction, each with exactly one
/// credit card and 1-10 orders.
pub fn seed_customers(
    store: &mut SqliteStore,
    generator: &mut Generator,
    count: u32,
    policy: FkPolicy,
) -> Result<SeedSummary> {
    let max_product_id = store.max_product_id()?;

    store.begin_transaction()?;
    let result = (|| {
        let mut summary = SeedSummary::default();

        for _ in 0..count {
            let customer_id = store.insert_customer(&NewCustomer {
                name: generator.name(),
                fullname: None,
                email_addresses: generator.email(),
                address: generator.address(),
                country_code: generator.country_code(),
            })?;
            summary.customers += 1;

            store.insert_credit_card(customer_id, &generator.credit_card_number())?;
            summary.credit_cards += 1;

            let order_count = generator.int_in(ORDER_RANGE.0, ORDER_RANGE.1);
            for _ in 0..order_count {
                let drawn = i64::from(generator.int_in(PRODUCT_ID_RANGE.0, PRODUCT_ID_RANGE.1));
                let product_id = match apply_policy(policy, drawn, max_product_id) {
                    Some(id) => id,
                    None => {
                        tracing::debug!(drawn, "skipping order with dangling product id");
                        summary.orders_skipped += 1;
                        continue;
                    }
                };

                store.insert_order(&NewOrder {
                    customer_id,
                    product_id,
                    quantity: generator.int_in(ORDER_RANGE.0, ORDER_RANGE.1),
                })?;
                summary.orders += 1;
            }
        }

        Ok(summary)
    })();

    finish(store, result)
}

/// Resolve a drawn product id under the given policy.
/// Returns `None` when the order row should be skipped.
fn apply_policy(policy: FkPolicy, drawn: i64, max_product_id: Option<i64>) -> Option<i64> {
    match policy {
        FkPolicy::Reject => Some(drawn),
        FkPolicy::Ignore => match max_product_id {
            Some(max) if drawn <= max => Some(drawn),
            _ => None,
        },
        FkPolicy::Clamp => match max_product_id {
            Some(max) => Some(drawn.min(max)),
            // nothing to clamp to
            None => None,
        },
    }
}

/// Commit on success, roll back on error, keeping the original error.
fn finish<T>(store: &mut SqliteStore, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            store.commit()?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = store.rollback() {
                tracing::error!("rollback failed: {rollback_err}");
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::luhn_valid;

    fn seeded_store(products: u32, customers: u32, policy: FkPolicy) -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut generator = Generator::seeded(7);
        seed_products(&mut store, products).unwrap();
        seed_customers(&mut store, &mut generator, customers, policy).unwrap();
        store
    }

    #[test]
    fn test_seed_products() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        seed_products(&mut store, 10).unwrap();

        let products = store.list_all_products().unwrap();
        assert_eq!(products.len(), 10);
        assert_eq!(products[0].name, "Product 0");
        assert_eq!(products[9].name, "Product 9");
        assert!(products.iter().all(|p| p.price == 9.99));
        assert!(products.iter().all(|p| p.category == "Widgets"));
    }

    #[test]
    fn test_country_counts_sum_to_customer_count() {
        let store = seeded_store(10, 25, FkPolicy::Reject);

        let counts = store.count_customers_by_country().unwrap();
        let total: i64 = counts.iter().map(|c| c.customers).sum();
        assert_eq!(total, 25);
    }

    #[test]
    fn test_every_customer_has_exactly_one_card() {
        let store = seeded_store(10, 25, FkPolicy::Reject);

        // the inner join returns one pair per seeded customer
        let pairs = store.list_customer_card_numbers().unwrap();
        assert_eq!(pairs.len(), 25);
        assert_eq!(store.count_credit_cards().unwrap(), 25);
        assert!(pairs.iter().all(|p| luhn_valid(&p.number)));
    }

    #[test]
    fn test_order_quantities_and_owners() {
        let store = seeded_store(10, 25, FkPolicy::Reject);

        let customer_ids: Vec<i64> =
            store.list_all_customers().unwrap().iter().map(|c| c.id).collect();
        let orders = store.list_all_orders().unwrap();
        assert!(!orders.is_empty());
        for order in &orders {
            assert!((1..=10).contains(&order.quantity));
            assert!(customer_ids.contains(&order.customer_id));
            assert!((1..=10).contains(&order.product_id));
        }
    }

    #[test]
    fn test_ten_and_ten_scenario() {
        let store = seeded_store(10, 10, FkPolicy::Reject);

        assert_eq!(store.list_all_customers().unwrap().len(), 10);
        let brazilians = store.list_customers_by_country("BR").unwrap();
        assert!(brazilians.iter().all(|c| c.country_code == "BR"));
    }

    #[test]
    fn test_reject_policy_rolls_back_whole_pass() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        // 500 customers at 3 products makes drawing an id above 3 certain
        // for all practical purposes
        let mut generator = Generator::seeded(11);
        seed_products(&mut store, 3).unwrap();

        let err = seed_customers(&mut store, &mut generator, 500, FkPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::Constraint(_)));

        // atomic: no partial rows visible
        assert_eq!(store.count_customers().unwrap(), 0);
        assert_eq!(store.count_credit_cards().unwrap(), 0);
        assert_eq!(store.count_orders().unwrap(), 0);
        assert_eq!(store.count_products().unwrap(), 3);
    }

    #[test]
    fn test_ignore_policy_skips_dangling_orders() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut generator = Generator::seeded(13);
        seed_products(&mut store, 3).unwrap();

        let summary = seed_customers(&mut store, &mut generator, 50, FkPolicy::Ignore).unwrap();
        assert_eq!(summary.customers, 50);
        assert!(summary.orders_skipped > 0);

        let orders = store.list_all_orders().unwrap();
        assert!(orders.iter().all(|o| o.product_id <= 3));
        assert_eq!(orders.len() as u32, summary.orders);
    }

    #[test]
    fn test_clamp_policy_keeps_ids_in_range() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut generator = Generator::seeded(17);
        seed_products(&mut store, 3).unwrap();

        let summary = seed_customers(&mut store, &mut generator, 50, FkPolicy::Clamp).unwrap();
        assert_eq!(summary.orders_skipped, 0);

        let orders = store.list_all_orders().unwrap();
        assert!(orders.iter().all(|o| (1..=3).contains(&o.product_id)));
    }

    #[test]
    fn test_clamp_with_no_products_skips_all_orders() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut generator = Generator::seeded(19);

        let summary = seed_customers(&mut store, &mut generator, 5, FkPolicy::Clamp).unwrap();
        assert_eq!(summary.customers, 5);
        assert_eq!(summary.orders, 0);
        assert!(summary.orders_skipped > 0);
        assert_eq!(store.count_orders().unwrap(), 0);
    }

    #[test]
    fn test_fk_policy_from_str() {
        assert_eq!("reject".parse::<FkPolicy>().unwrap(), FkPolicy::Reject);
        assert_eq!("Ignore".parse::<FkPolicy>().unwrap(), FkPolicy::Ignore);
        assert_eq!("CLAMP".parse::<FkPolicy>().unwrap(), FkPolicy::Clamp);
        assert!("drop".parse::<FkPolicy>().is_err());
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        let a = seeded_store(10, 10, FkPolicy::Reject);
        let b = seeded_store(10, 10, FkPolicy::Reject);

        assert_eq!(a.list_all_customers().unwrap(), b.list_all_customers().unwrap());
        assert_eq!(
            a.list_customer_card_numbers().unwrap(),
            b.list_customer_card_numbers().unwrap()
        );
    }
}
