//! The `quotegen products` subcommands: the isolated catalog add/list.

use std::path::Path;

use anyhow::Context;
use quotegen_core::validation::parse_unit_price;

use crate::commands::open_database;

pub async fn run_add(
    database: &Path,
    name: &str,
    quantity: f64,
    price_text: &str,
) -> anyhow::Result<()> {
    let price = parse_unit_price(price_text).context("invalid --price")?;

    let db = open_database(database).await?;
    let id = db.products().add_product(name, quantity, price).await?;

    println!("Added product {name} (id {id}).");
    Ok(())
}

pub async fn run_list(database: &Path) -> anyhow::Result<()> {
    let db = open_database(database).await?;
    let rows = db.products().get_all_products().await?;

    if rows.is_empty() {
        println!("No products stored yet.");
        return Ok(());
    }

    println!("{:>4}  {:<32} {:>10} {:>16}", "ID", "Name", "Qty", "Price");
    for row in &rows {
        println!(
            "{:>4}  {:<32} {:>10} {:>16}",
            row.product_id,
            row.name,
            row.quantity,
            row.price().to_string(),
        );
    }

    Ok(())
}
