//! Query component - the fixed set of read-only report queries.
//!
//! Each query is independent and pure-read; a failing query terminates that
//! query without discarding output already printed for earlier ones.

use std::str::FromStr;

use tabled::Tabled;

use crate::model::Customer;
use crate::storage::SqliteStore;
use crate::ui;
use crate::{Error, Result};

/// Output format for `report`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(Error::Config(format!("Unknown report format: {s}"))),
        }
    }
}

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            country: c.country_code.clone(),
            email: c.email_addresses.clone(),
        }
    }
}

#[derive(Tabled)]
struct CountryRow {
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Customers")]
    customers: i64,
}

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Customer")]
    name: String,
    #[tabled(rename = "Card Number")]
    number: String,
}

#[derive(Tabled)]
struct OrderCountRow {
    #[tabled(rename = "Customer")]
    name: String,
    #[tabled(rename = "Orders")]
    orders: i64,
}

/// Run all five report queries and print the results as tables.
///
/// `country` selects the code for the filtered customer listing.
pub fn print_text(store: &SqliteStore, country: &str) -> Result<()> {
    let customers = store.list_all_customers()?;
    ui::section(&format!("All customers ({})", customers.len()));
    let rows: Vec<CustomerRow> = customers.iter().map(CustomerRow::from).collect();
    print_or_empty(&ui::render(&rows));

    let filtered = store.list_customers_by_country(country)?;
    ui::section(&format!("Customers in {country} ({})", filtered.len()));
    let rows: Vec<CustomerRow> = filtered.iter().map(CustomerRow::from).collect();
    print_or_empty(&ui::render(&rows));

    let counts = store.count_customers_by_country()?;
    ui::section("Customers by country");
    let rows: Vec<CountryRow> = counts
        .into_iter()
        .map(|c| CountryRow { country: c.country_code, customers: c.customers })
        .collect();
    print_or_empty(&ui::render(&rows));

    let cards = store.list_customer_card_numbers()?;
    ui::section("Credit cards");
    let rows: Vec<CardRow> = cards
        .into_iter()
        .map(|c| CardRow { name: c.name, number: c.number })
        .collect();
    print_or_empty(&ui::render(&rows));

    let order_counts = store.list_order_counts_by_customer()?;
    ui::section("Orders per customer");
    let rows: Vec<OrderCountRow> = order_counts
        .into_iter()
        .map(|c| OrderCountRow { name: c.name, orders: c.orders })
        .collect();
    print_or_empty(&ui::render(&rows));

    Ok(())
}

fn print_or_empty(table: &str) {
    if table.is_empty() {
        println!("{}", ui::dim("(no rows)"));
    } else {
        println!("{table}");
    }
}

/// All five query results as one JSON document
pub fn build_json(store: &SqliteStore, country: &str) -> Result<serde_json::Value> {
    Ok(serde_json::json!({
        "customers": store.list_all_customers()?,
        "customers_by_country": {
            "country": country,
            "rows": store.list_customers_by_country(country)?,
        },
        "country_counts": store.count_customers_by_country()?,
        "customer_cards": store.list_customer_card_numbers()?,
        "order_counts": store.list_order_counts_by_customer()?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{self, FkPolicy};
    use crate::synth::Generator;

    #[test]
    fn test_json_report_shape() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut generator = Generator::seeded(23);
        seed::seed_products(&mut store, 10).unwrap();
        seed::seed_customers(&mut store, &mut generator, 10, FkPolicy::Reject).unwrap();

        let doc = build_json(&store, "BR").unwrap();
        assert_eq!(doc["customers"].as_array().unwrap().len(), 10);
        assert_eq!(doc["customer_cards"].as_array().unwrap().len(), 10);
        assert_eq!(doc["customers_by_country"]["country"], "BR");
        assert!(doc["country_counts"].is_array());
        assert!(doc["order_counts"].is_array());
    }

    #[test]
    fn test_json_report_on_empty_store() {
        let store = SqliteStore::open_in_memory().unwrap();
        let doc = build_json(&store, "US").unwrap();
        assert_eq!(doc["customers"].as_array().unwrap().len(), 0);
        assert_eq!(doc["order_counts"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
