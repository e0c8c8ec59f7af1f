//! The `quotegen create` flow: specs → ledger → assembled document →
//! optional save and PDF export.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing::info;

use quotegen_core::{
    assemble, generate_document_number, ClientDetails, Document, DocumentHeader, DocumentType,
    Ledger,
};
use quotegen_db::InvoiceRepository;
use quotegen_pdf::default_filename;

use crate::commands::open_database;
use crate::item_spec::parse_item_spec;

/// Attempts before giving up on finding an unused document number.
/// With 16^8 possible tokens a second attempt is already rare.
const NUMBER_ATTEMPTS: usize = 10;

/// Everything `create` needs beyond the database path.
pub struct CreateOptions {
    pub doc_type: DocumentType,
    pub client: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub items: Vec<String>,
    pub save: bool,
    pub pdf: bool,
    pub out: PathBuf,
}

pub async fn run_create(database: &Path, opts: CreateOptions) -> anyhow::Result<()> {
    let mut ledger = Ledger::new();
    for spec in &opts.items {
        let spec = parse_item_spec(spec).map_err(anyhow::Error::msg)?;
        ledger
            .add(&spec.product, &spec.quantity, spec.unit, &spec.price)
            .with_context(|| format!("rejected item '{}'", spec.product))?;
    }

    // The database is only touched when persisting; a PDF-only run
    // must not create a database file as a side effect.
    let db = if opts.save {
        Some(open_database(database).await?)
    } else {
        None
    };

    let number = match &db {
        Some(db) => allocate_number(&db.invoices()).await?,
        None => generate_document_number(),
    };

    let header = DocumentHeader {
        document_type: opts.doc_type,
        number,
        client: ClientDetails {
            name: opts.client,
            address: opts.address,
            phone: opts.phone,
            email: opts.email,
        },
    };
    let document = assemble(header, &ledger)?;

    print_summary(&document);

    if let Some(db) = &db {
        let id = db.invoices().save(&document).await?;
        info!(id, number = %document.number, "Document saved");
        println!("Saved to database (id {id}).");
    }

    if opts.pdf {
        let path = opts.out.join(default_filename(&document));
        quotegen_pdf::render(&document, &path)?;
        println!("PDF written to {}.", path.display());
    }

    Ok(())
}

/// Generates a document number and verifies it is unused, retrying on
/// the (unlikely) collision.
async fn allocate_number(repo: &InvoiceRepository) -> anyhow::Result<String> {
    for _ in 0..NUMBER_ATTEMPTS {
        let number = generate_document_number();
        if !repo.number_exists(&number).await? {
            return Ok(number);
        }
        info!(number = %number, "Document number collision, regenerating");
    }
    bail!("could not find an unused document number after {NUMBER_ATTEMPTS} attempts");
}

fn print_summary(document: &Document) {
    println!("{} {}", document.document_type, document.number);
    println!("Client: {}", document.client.name);
    println!();
    println!(
        "{:<32} {:>8} {:>5} {:>16} {:>16}",
        "Item", "Qty", "Unit", "Price", "Total"
    );
    for item in &document.items {
        println!(
            "{:<32} {:>8} {:>5} {:>16} {:>16}",
            item.product,
            item.quantity_label(),
            item.unit.as_str(),
            item.unit_price().to_string(),
            item.line_total().to_string(),
        );
    }
    println!();
    println!("{:>64} {}", "Subtotal:", document.subtotal());
    println!("{:>64} {}", "VAT (16%):", document.vat());
    println!("{:>64} {}", "TOTAL:", document.grand_total());
}
