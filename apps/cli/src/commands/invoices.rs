//! The `quotegen invoices` subcommands: list, show, delete.

use std::path::Path;

use quotegen_core::Money;
use quotegen_db::DbError;

use crate::commands::open_database;

pub async fn run_list(database: &Path) -> anyhow::Result<()> {
    let db = open_database(database).await?;
    let rows = db.invoices().list_all().await?;

    if rows.is_empty() {
        println!("No documents stored yet.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<14} {:<10} {:<28} {:>16}  {}",
        "ID", "Number", "Type", "Client", "Total", "Created"
    );
    for row in &rows {
        println!(
            "{:>4}  {:<14} {:<10} {:<28} {:>16}  {}",
            row.invoice_id,
            row.quotation_number,
            row.document_type,
            row.client_name,
            row.total().to_string(),
            row.created_at.format("%Y-%m-%d %H:%M"),
        );
    }
    println!();
    println!("{} document(s).", rows.len());

    Ok(())
}

pub async fn run_show(database: &Path, number: &str) -> anyhow::Result<()> {
    let db = open_database(database).await?;

    let Some(row) = db.invoices().find_by_number(number).await? else {
        println!("No document with number {number}.");
        return Ok(());
    };

    println!("{} {}", row.document_type, row.quotation_number);
    println!("Client:  {}", row.client_name);
    if let Some(address) = &row.client_address {
        println!("Address: {address}");
    }
    if let Some(phone) = &row.client_phone {
        println!("Phone:   {phone}");
    }
    if let Some(email) = &row.client_email {
        println!("Email:   {email}");
    }
    println!("Created: {}", row.created_at.format("%Y-%m-%d %H:%M"));
    println!();

    let items = db.invoices().get_items(row.invoice_id).await?;
    println!(
        "{:<32} {:>8} {:>5} {:>16} {:>16}",
        "Item", "Qty", "Unit", "Price", "Total"
    );
    for item in &items {
        println!(
            "{:<32} {:>8} {:>5} {:>16} {:>16}",
            item.product_name,
            item.quantity,
            item.unit,
            Money::from_cents(item.unit_price).to_string(),
            Money::from_cents(item.total_price).to_string(),
        );
    }
    println!();
    println!("{:>64} {}", "Total:", row.total());

    Ok(())
}

pub async fn run_delete(database: &Path, id: i64) -> anyhow::Result<()> {
    let db = open_database(database).await?;

    match db.invoices().delete(id).await {
        Ok(()) => {
            println!("Deleted document {id} and its line items.");
            Ok(())
        }
        Err(DbError::NotFound { .. }) => {
            println!("No document with id {id}.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
