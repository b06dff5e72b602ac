//! Seed the database with demo products and stock records.
//!
//! Inserts a small set of farm products across every category and a zeroed
//! aggregate stock record for each medicine product, giving a fresh
//! database something to render. Safe to run repeatedly; existing products
//! and stock records are left untouched.

use secrecy::SecretString;
use tracing::info;

use farmstead_core::ProductCategory;
use farmstead_server::db::{self, MedicalStockRepository, ProductRepository};

/// Demo products inserted by `farm-cli seed`.
const DEMO_PRODUCTS: &[(&str, ProductCategory)] = &[
    ("Amoxicillin 250mg", ProductCategory::AnimalMedicine),
    ("Ivermectin Paste", ProductCategory::AnimalMedicine),
    ("Oxytetracycline Spray", ProductCategory::AnimalMedicine),
    ("Calf Starter Feed", ProductCategory::AnimalFeed),
    ("Layer Pellets", ProductCategory::AnimalFeed),
    ("Electric Fence Wire", ProductCategory::Equipment),
    ("Work Gloves", ProductCategory::General),
];

/// Seed demo products and stock records.
///
/// # Errors
///
/// Returns an error if environment variables are missing or database
/// operations fail.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("FARMSTEAD_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "FARMSTEAD_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let products = ProductRepository::new(&pool);
    let stocks = MedicalStockRepository::new(&pool);

    let mut seeded_products = 0;
    let mut seeded_stocks = 0;

    for &(name, category) in DEMO_PRODUCTS {
        let product = products.find_or_create(name, category).await?;
        seeded_products += 1;

        // Only medicine is tracked in medical stock
        if category.requires_unit_tracking() {
            stocks.seed(product.id, 0).await?;
            seeded_stocks += 1;
        }

        info!(product = name, category = %category, "Seeded product");
    }

    info!("Seeding complete!");
    info!("  Products: {seeded_products}");
    info!("  Stock records: {seeded_stocks}");

    Ok(())
}
