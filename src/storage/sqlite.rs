//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, params};

use super::schema;
use crate::Result;
use crate::model::{
    CountryCount, Customer, CustomerCard, CustomerOrders, NewCustomer, NewOrder, NewProduct,
    Order, Product,
};

/// SQLite-backed store for the storefront schema.
///
/// One `SqliteStore` owns one connection. Callers acquire a store, pass it
/// explicitly to the seeding and report components, and drop it when done;
/// there is no process-wide session.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Referential integrity is enforced by the store, not the application.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Idempotently ensure all tables and indexes exist.
    ///
    /// Every statement is `CREATE ... IF NOT EXISTS`, so running this against
    /// an already-initialized store is a no-op.
    pub fn init_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Insert Operations ==========

    /// Insert a customer, returning the store-assigned id
    pub fn insert_customer(&self, customer: &NewCustomer) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO customer (name, fullname, email_addresses, address, country_code)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                customer.name,
                customer.fullname,
                customer.email_addresses,
                customer.address,
                customer.country_code,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a credit card for a customer, returning the store-assigned id
    pub fn insert_credit_card(&self, customer_id: i64, number: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO credit_card (customer_id, number) VALUES (?1, ?2)",
            params![customer_id, number],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a product, returning the store-assigned id
    pub fn insert_product(&self, product: &NewProduct) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO product (name, price, description, category)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                product.name,
                product.price,
                product.description,
                product.category,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert an order, returning the store-assigned id
    pub fn insert_order(&self, order: &NewOrder) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO \"order\" (customer_id, product_id, quantity) VALUES (?1, ?2, ?3)",
            params![order.customer_id, order.product_id, order.quantity],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    // ========== Report Queries ==========

    /// All customer rows
    pub fn list_all_customers(&self) -> Result<Vec<Customer>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, fullname, email_addresses, address, country_code FROM customer",
        )?;

        let customers = stmt
            .query_map([], |row| Self::row_to_customer(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(customers)
    }

    /// Customer rows whose country_code equals `code`
    pub fn list_customers_by_country(&self, code: &str) -> Result<Vec<Customer>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, fullname, email_addresses, address, country_code FROM customer WHERE country_code = ?1",
        )?;

        let customers = stmt
            .query_map([code], |row| Self::row_to_customer(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(customers)
    }

    /// Customer count per country code
    pub fn count_customers_by_country(&self) -> Result<Vec<CountryCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT country_code, COUNT(*) FROM customer GROUP BY country_code ORDER BY country_code",
        )?;

        let counts = stmt
            .query_map([], |row| {
                Ok(CountryCount {
                    country_code: row.get(0)?,
                    customers: row.get(1)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(counts)
    }

    /// (customer name, card number) pairs via inner join.
    /// Customers without a card are excluded.
    pub fn list_customer_card_numbers(&self) -> Result<Vec<CustomerCard>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT c.name, cc.number
            FROM customer c
            JOIN credit_card cc ON cc.customer_id = c.id
            "#,
        )?;

        let pairs = stmt
            .query_map([], |row| {
                Ok(CustomerCard {
                    name: row.get(0)?,
                    number: row.get(1)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(pairs)
    }

    /// (customer name, order count) pairs via inner join and group-by.
    /// Customers with zero orders are excluded.
    pub fn list_order_counts_by_customer(&self) -> Result<Vec<CustomerOrders>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT c.name, COUNT(o.id)
            FROM customer c
            JOIN "order" o ON o.customer_id = c.id
            GROUP BY c.name
            "#,
        )?;

        let pairs = stmt
            .query_map([], |row| {
                Ok(CustomerOrders {
                    name: row.get(0)?,
                    orders: row.get(1)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(pairs)
    }

    // ========== Lookups used by the seeder ==========

    /// Highest product id currently in the store (None when empty)
    pub fn max_product_id(&self) -> Result<Option<i64>> {
        let max: Option<i64> =
            self.conn
                .query_row("SELECT MAX(id) FROM product", [], |row| row.get(0))?;
        Ok(max)
    }

    /// All product rows
    pub fn list_all_products(&self) -> Result<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, price, description, category FROM product")?;

        let products = stmt
            .query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    price: row.get(2)?,
                    description: row.get(3)?,
                    category: row.get(4)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(products)
    }

    /// All order rows
    pub fn list_all_orders(&self) -> Result<Vec<Order>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, customer_id, product_id, quantity FROM \"order\"")?;

        let orders = stmt
            .query_map([], |row| {
                Ok(Order {
                    id: row.get(0)?,
                    customer_id: row.get(1)?,
                    product_id: row.get(2)?,
                    quantity: row.get(3)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(orders)
    }

    // ========== Counts & Stats ==========

    /// Count all customers
    pub fn count_customers(&self) -> Result<usize> {
        self.count_table("customer")
    }

    /// Count all credit cards
    pub fn count_credit_cards(&self) -> Result<usize> {
        self.count_table("credit_card")
    }

    /// Count all products
    pub fn count_products(&self) -> Result<usize> {
        self.count_table("product")
    }

    /// Count all orders
    pub fn count_orders(&self) -> Result<usize> {
        self.count_table("\"order\"")
    }

    fn count_table(&self, table: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            customers: self.count_customers()?,
            credit_cards: self.count_credit_cards()?,
            products: self.count_products()?,
            orders: self.count_orders()?,
        })
    }

    // ========== Transactions ==========

    /// Begin a transaction for a seeding pass
    pub fn begin_transaction(&mut self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&mut self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&mut self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }

    /// Helper to convert a row to a Customer
    fn row_to_customer(row: &rusqlite::Row) -> rusqlite::Result<Customer> {
        Ok(Customer {
            id: row.get(0)?,
            name: row.get(1)?,
            fullname: row.get(2)?,
            email_addresses: row.get(3)?,
            address: row.get(4)?,
            country_code: row.get(5)?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoreStats {
    pub customers: usize,
    pub credit_cards: usize,
    pub products: usize,
    pub orders: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store Statistics:")?;
        writeln!(f, "  Customers: {}", self.customers)?;
        writeln!(f, "  Credit cards: {}", self.credit_cards)?;
        writeln!(f, "  Products: {}", self.products)?;
        writeln!(f, "  Orders: {}", self.orders)
    }
}
