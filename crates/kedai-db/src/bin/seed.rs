//! # Seed Data Generator
//!
//! Populates a database with sample products, sales and expenses for
//! development.
//!
//! ## Usage
//! ```bash
//! # 20 products (default), a few sales each, a month of expenses
//! cargo run -p kedai-db --bin seed
//!
//! # Custom amount
//! cargo run -p kedai-db --bin seed -- --count 60
//!
//! # Specify database path
//! cargo run -p kedai-db --bin seed -- --db ./data/kedai.db
//! ```
//!
//! Everything goes through the [`Ledger`] API, so stock levels and sale
//! snapshots are consistent with what the app would have produced.

use std::env;

use chrono::{Duration, Utc};
use kedai_core::{ExpenseCategory, Money, NewExpense, NewProduct, NewSale, ProductCategory};
use kedai_db::{Database, DbConfig, Ledger};

/// Product names per category for realistic test data
const CATALOG: &[(ProductCategory, &[&str])] = &[
    (
        ProductCategory::Food,
        &["Beras 5kg", "Mie Instan", "Gula Pasir", "Minyak Goreng", "Telur 1kg", "Roti Tawar"],
    ),
    (
        ProductCategory::Beverage,
        &["Teh Botol", "Kopi Sachet", "Air Mineral", "Susu UHT", "Jus Jeruk"],
    ),
    (
        ProductCategory::Health,
        &["Sabun Mandi", "Pasta Gigi", "Sampo", "Minyak Kayu Putih"],
    ),
    (
        ProductCategory::Electronics,
        &["Baterai AA", "Lampu LED", "Kabel Data"],
    ),
    (
        ProductCategory::Clothing,
        &["Kaos Polos", "Kaus Kaki"],
    ),
];

/// Recurring expenses: (description, category, amount in cents, days between)
const EXPENSES: &[(&str, ExpenseCategory, i64, i64)] = &[
    ("Sewa toko", ExpenseCategory::Rent, 150_000, 30),
    ("Listrik", ExpenseCategory::Utilities, 35_000, 30),
    ("Gaji karyawan", ExpenseCategory::Payroll, 200_000, 30),
    ("Belanja stok", ExpenseCategory::InventoryPurchase, 80_000, 7),
    ("Bensin antar barang", ExpenseCategory::Transport, 5_000, 3),
];

const CUSTOMERS: &[&str] = &["Bu Sari", "Pak Budi", "Mbak Rina", "Mas Joko"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 20;
    let mut db_path = String::from("./kedai_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kedai Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 20)");
                println!("  -d, --db <PATH>    Database file path (default: ./kedai_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Kedai Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let ledger = Ledger::open(db.clone()).await?;

    let existing = ledger.with_books(|b| b.products().len()).await;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");
    let start = std::time::Instant::now();

    let names = CATALOG
        .iter()
        .flat_map(|(category, names)| names.iter().map(move |name| (*category, *name)))
        .cycle()
        .take(count);

    let mut product_ids = Vec::with_capacity(count);
    for (seed, (category, name)) in names.enumerate() {
        let draft = generate_product(category, name, seed);
        let product = ledger.add_product(draft).await?;
        product_ids.push(product.id);
    }
    println!("  Generated {} products", product_ids.len());

    println!("Recording sales...");
    let now = Utc::now();
    let mut sales = 0;
    for (seed, id) in product_ids.iter().enumerate() {
        for n in 0..(seed % 4) {
            let draft = NewSale {
                customer_name: (n % 2 == 0).then(|| CUSTOMERS[(seed + n) % CUSTOMERS.len()].to_string()),
                date: Some(now - Duration::days(((seed * 7 + n * 11) % 45) as i64)),
                ..NewSale::new(id.clone(), 1 + ((seed + n) % 3) as i64)
            };

            match ledger.add_sale(draft).await {
                Ok(_) => sales += 1,
                Err(e) => eprintln!("Skipped sale for {}: {}", id, e),
            }
        }
    }
    println!("  Recorded {} sales", sales);

    println!("Recording expenses...");
    let mut expenses = 0;
    for (description, category, cents, every) in EXPENSES {
        let mut days_ago = 0;
        while days_ago < 60 {
            ledger
                .add_expense(NewExpense {
                    description: description.to_string(),
                    amount: Money::from_cents(*cents),
                    category: *category,
                    date: Some(now - Duration::days(days_ago)),
                })
                .await?;
            expenses += 1;
            days_ago += every;
        }
    }
    println!("  Recorded {} expenses", expenses);

    let summary = ledger.financial_summary().await;
    println!();
    println!("✓ Seed complete in {:?}", start.elapsed());
    println!("  Revenue:   {}", summary.total_revenue);
    println!("  Expenses:  {}", summary.total_expenses);
    println!("  Profit:    {}", summary.net_profit);
    println!("  Low stock: {}", summary.low_stock_count);

    db.close().await;
    Ok(())
}

/// Generates a single product with deterministic, realistic data.
fn generate_product(category: ProductCategory, name: &str, seed: usize) -> NewProduct {
    // Base cost 2.00 - 49.99
    let cost_cents = 200 + ((seed * 317) % 4800) as i64;

    // Markup 15% - 45%
    let markup_pct = 15 + (seed % 31) as i64;
    let price_cents = cost_cents + cost_cents * markup_pct / 100;

    // Some products start low on stock
    let stock = ((seed * 13) % 60) as i64;
    let min_stock = 5 + (seed % 6) as i64;

    NewProduct {
        name: name.to_string(),
        description: format!("{} (sample #{})", name, seed + 1),
        category,
        purchase_price: Money::from_cents(cost_cents),
        selling_price: Money::from_cents(price_cents),
        stock,
        min_stock,
    }
}
