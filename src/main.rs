//! Shopseed CLI - seed a synthetic storefront database and report on it

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use shopseed::report::{self, ReportFormat};
use shopseed::seed::{self, FkPolicy};
use shopseed::storage::SqliteStore;
use shopseed::synth::Generator;
use shopseed::ui::{self, Icons, Spinner, TableBuilder};
use shopseed::config::{self, ShopseedConfig};

#[derive(Parser)]
#[command(name = "shopseed")]
#[command(version = "0.1.0")]
#[command(about = "Synthetic storefront database - seeding and report queries over SQLite")]
#[command(long_about = r#"
Shopseed maintains a small storefront schema (customers, credit cards,
products, orders), fills it with locale-randomized synthetic data, and runs
a fixed set of report queries against it.

Example usage:
  shopseed init --database shop.db
  shopseed seed --customers 10 --products 10
  shopseed report --country BR
  shopseed stats
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database file and its schema (idempotent)
    Init {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Also write a shopseed.toml with the chosen defaults
        #[arg(long)]
        write_config: bool,

        /// Overwrite an existing shopseed.toml
        #[arg(long)]
        force: bool,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Populate the store with synthetic products, customers, cards and orders
    Seed {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Number of products to insert
        #[arg(short, long)]
        products: Option<u32>,

        /// Number of customers to insert
        #[arg(short = 'n', long)]
        customers: Option<u32>,

        /// Fixed RNG seed for a reproducible dataset
        #[arg(short, long)]
        seed: Option<u64>,

        /// What to do when an order draws a product id with no matching row
        /// (reject, ignore, clamp)
        #[arg(long)]
        fk_policy: Option<String>,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run the report queries and print the results
    Report {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Country code for the filtered customer listing
        #[arg(long, default_value = "BR")]
        country: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show row counts for all tables
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn resolve_database(flag: Option<PathBuf>, cfg: &ShopseedConfig) -> PathBuf {
    flag.or_else(|| cfg.database.as_ref().map(PathBuf::from))
        .unwrap_or_else(config::default_database_path)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Init { database, write_config, force, config: config_path } => {
            let cfg = config::load_config(config_path.as_deref())?.unwrap_or_default();
            let db = resolve_database(database, &cfg);
            config::ensure_db_dir(&db)?;

            let _store = SqliteStore::open(&db)?;
            ui::success(&format!("Schema ready at {}", db.display()));

            if write_config {
                let path = config_path.unwrap_or_else(config::default_config_path);
                let cfg = ShopseedConfig {
                    database: Some(db.display().to_string()),
                    ..ShopseedConfig::default()
                };
                config::write_config(&path, &cfg, force)?;
                ui::success(&format!("Wrote {}", path.display()));
            }
        }

        Commands::Seed { database, products, customers, seed: rng_seed, fk_policy, config: config_path } => {
            let cfg = config::load_config(config_path.as_deref())?.unwrap_or_default();
            let db = resolve_database(database, &cfg);
            config::ensure_db_dir(&db)?;

            let products = products.or(cfg.products).unwrap_or(10);
            let customers = customers.or(cfg.customers).unwrap_or(10);
            let policy = match fk_policy {
                Some(s) => s.parse::<FkPolicy>()?,
                None => cfg.fk_policy.unwrap_or(FkPolicy::Reject),
            };
            let mut generator = match rng_seed.or(cfg.rng_seed) {
                Some(s) => Generator::seeded(s),
                None => Generator::new(),
            };

            let mut store = SqliteStore::open(&db)?;

            ui::header("Seeding storefront database");
            ui::status(Icons::DATABASE, "Database", &db.display().to_string());
            ui::status(Icons::GEAR, "FK policy", policy.as_str());
            let started = Instant::now();

            ui::phase("Products");
            let inserted = seed::seed_products(&mut store, products)?;
            ui::summary_row("inserted:", &inserted.to_string());

            ui::phase("Customers");
            let spinner = Spinner::new(&format!("Seeding {customers} customers..."));
            let summary = match seed::seed_customers(&mut store, &mut generator, customers, policy)
            {
                Ok(summary) => {
                    spinner.finish_and_clear();
                    summary
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    ui::error("Seeding aborted; transaction rolled back");
                    return Err(e.into());
                }
            };
            ui::summary_row("customers:", &summary.customers.to_string());
            ui::summary_row("credit cards:", &summary.credit_cards.to_string());
            ui::summary_row("orders:", &summary.orders.to_string());
            if summary.orders_skipped > 0 {
                ui::warn(&format!(
                    "{} order rows skipped (fk policy: {})",
                    summary.orders_skipped, policy
                ));
            }

            println!();
            ui::success(&format!(
                "Seeding complete in {:.2?}",
                started.elapsed()
            ));

            let stats = store.stats()?;
            tracing::info!(
                customers = stats.customers,
                products = stats.products,
                orders = stats.orders,
                "store totals"
            );
        }

        Commands::Report { database, country, format, config: config_path } => {
            let cfg = config::load_config(config_path.as_deref())?.unwrap_or_default();
            let db = resolve_database(database, &cfg);
            let store = SqliteStore::open(&db)?;

            match format.parse::<ReportFormat>()? {
                ReportFormat::Text => {
                    ui::header(&format!("Storefront report ({})", db.display()));
                    report::print_text(&store, &country)?;
                }
                ReportFormat::Json => {
                    let doc = report::build_json(&store, &country)?;
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
            }
        }

        Commands::Stats { database, config: config_path } => {
            let cfg = config::load_config(config_path.as_deref())?.unwrap_or_default();
            let db = resolve_database(database, &cfg);
            let store = SqliteStore::open(&db)?;
            let stats = store.stats()?;

            ui::header(&format!("Store statistics ({})", db.display()));
            let mut table = TableBuilder::new();
            table.add_row("Customers", &stats.customers.to_string());
            table.add_row("Credit cards", &stats.credit_cards.to_string());
            table.add_row("Products", &stats.products.to_string());
            table.add_row("Orders", &stats.orders.to_string());
            println!("{}", table.build());
        }
    }

    Ok(())
}
