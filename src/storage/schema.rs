//! Database schema definitions

/// SQL to create the customer table
pub const CREATE_CUSTOMER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customer (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(name) <= 100),
    fullname TEXT,
    email_addresses TEXT NOT NULL,
    address TEXT NOT NULL,
    country_code TEXT NOT NULL CHECK (length(country_code) <= 2)
)
"#;

/// SQL to create the credit_card table.
/// UNIQUE(customer_id) enforces at most one card per customer.
pub const CREATE_CREDIT_CARD_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS credit_card (
    id INTEGER PRIMARY KEY,
    customer_id INTEGER NOT NULL UNIQUE REFERENCES customer(id),
    number TEXT NOT NULL CHECK (length(number) <= 19)
)
"#;

/// SQL to create the product table
pub const CREATE_PRODUCT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS product (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(name) <= 100),
    price REAL NOT NULL CHECK (price >= 0.0),
    description TEXT NOT NULL,
    category TEXT NOT NULL CHECK (length(category) <= 100)
)
"#;

/// SQL to create the order table ("order" is an SQL keyword, hence quoted)
pub const CREATE_ORDER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "order" (
    id INTEGER PRIMARY KEY,
    customer_id INTEGER NOT NULL REFERENCES customer(id),
    product_id INTEGER NOT NULL REFERENCES product(id),
    quantity INTEGER NOT NULL CHECK (quantity > 0)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_customer_country ON customer(country_code)",
    "CREATE INDEX IF NOT EXISTS idx_order_customer ON \"order\"(customer_id)",
    "CREATE INDEX IF NOT EXISTS idx_order_product ON \"order\"(product_id)",
];

/// All schema creation statements, in dependency order
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_CUSTOMER_TABLE,
        CREATE_CREDIT_CARD_TABLE,
        CREATE_PRODUCT_TABLE,
        CREATE_ORDER_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
