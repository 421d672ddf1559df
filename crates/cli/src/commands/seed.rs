//! Catalog seeding command.
//!
//! Inserts the fixed fallback product list into the `SQLite` catalog so a
//! fresh deployment starts with something to sell. Idempotent by default:
//! refuses to insert when the products table already has rows.

use adorly_server::store::{fallback_products, sqlite};

use super::{CommandError, database_url};

/// Seed the catalog.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing or a query fails.
pub async fn run(force: bool) -> Result<(), CommandError> {
    let url = database_url()?;
    let pool = sqlite::create_pool(&url).await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await?;

    if count > 0 && !force {
        tracing::info!(existing = count, "products table not empty, skipping (use --force to insert anyway)");
        return Ok(());
    }

    let products = fallback_products();
    let total = products.len();
    for product in products {
        sqlx::query(
            "INSERT INTO products (name, description, price, image_url, category)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_string())
        .bind(&product.image_url)
        .bind(product.category.as_str())
        .execute(&pool)
        .await?;
    }

    tracing::info!(inserted = total, "catalog seeded");
    Ok(())
}
