//! # Quotegen CLI (`quotegen`)
//!
//! The `quotegen` binary is the frontend for the quotation generator. It
//! drives the ledger and assembler in `quotegen-core`, persists documents
//! through `quotegen-db`, and exports PDFs through `quotegen-pdf`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quotegen create` | Build a document from `--item` specs; save and/or export |
//! | `quotegen invoices list` | List all stored documents, oldest first |
//! | `quotegen invoices show <number>` | Show one document with its line items |
//! | `quotegen invoices delete <id>` | Delete a document and its items |
//! | `quotegen products add` | Add a product to the standalone catalog |
//! | `quotegen products list` | List the product catalog |
//!
//! ## Examples
//!
//! ```bash
//! # A quotation with two line items, saved and exported
//! quotegen create --client "Acme Ltd" \
//!     --item "Cat-6 cable:40:set:1,100.00" \
//!     --item "Patch panel:1.5:dzn:500" \
//!     --save --pdf
//!
//! # An invoice, PDF only, into a specific directory
//! quotegen create --doc-type invoice --client "Acme Ltd" \
//!     --item "Installation:1:set:25000" --pdf --out ./exports
//!
//! # Browse what has been saved
//! quotegen invoices list
//! quotegen invoices show QTN-3FA2B91C
//! ```

mod commands;
mod item_spec;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use quotegen_core::DocumentType;

/// Quotegen — quotation and invoice generator with SQLite storage and
/// PDF export.
#[derive(Parser)]
#[command(
    name = "quotegen",
    about = "Quotation and invoice generator with SQLite storage and PDF export",
    version
)]
struct Cli {
    /// Path to the SQLite database file. Created on first use.
    #[arg(long, global = true, default_value = "quotations.db")]
    database: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a document from line-item specs.
    ///
    /// Items are given as `NAME:QTY:UNIT:PRICE`, e.g.
    /// `"Cat-6 cable:40:set:1,100.00"`. Quantities may be decimal;
    /// units are `dzn` or `set`. Without `--save` or `--pdf` the
    /// document is only printed.
    Create {
        /// Document type: `quotation` or `invoice`.
        #[arg(long, default_value = "quotation")]
        doc_type: DocumentType,

        /// Client name (required, non-empty).
        #[arg(long)]
        client: String,

        /// Client postal address.
        #[arg(long)]
        address: Option<String>,

        /// Client phone number.
        #[arg(long)]
        phone: Option<String>,

        /// Client email address.
        #[arg(long)]
        email: Option<String>,

        /// Line item spec `NAME:QTY:UNIT:PRICE`. Repeatable; at least one.
        #[arg(long = "item", required = true)]
        items: Vec<String>,

        /// Persist the document to the database.
        #[arg(long)]
        save: bool,

        /// Export the document as a PDF.
        #[arg(long)]
        pdf: bool,

        /// Output directory for the PDF (filename is derived from the
        /// document number).
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Browse and manage stored documents.
    Invoices {
        #[command(subcommand)]
        action: InvoiceAction,
    },

    /// Manage the standalone product catalog.
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
}

/// Stored-document subcommands.
#[derive(Subcommand)]
enum InvoiceAction {
    /// List all stored documents, oldest first.
    List,

    /// Show one document and its line items.
    Show {
        /// Document number, e.g. `QTN-3FA2B91C`.
        number: String,
    },

    /// Delete a document. Its line items are removed with it.
    Delete {
        /// Database id (first column of `invoices list`).
        id: i64,
    },
}

/// Product catalog subcommands.
#[derive(Subcommand)]
enum ProductAction {
    /// Add a product to the catalog.
    Add {
        /// Product name.
        name: String,

        /// Stock quantity. May be decimal.
        #[arg(long, default_value = "0")]
        quantity: f64,

        /// Unit price, e.g. `1,100.00`.
        #[arg(long)]
        price: String,
    },

    /// List the product catalog, oldest first.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,quotegen=info,sqlx=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            doc_type,
            client,
            address,
            phone,
            email,
            items,
            save,
            pdf,
            out,
        } => {
            let opts = commands::create::CreateOptions {
                doc_type,
                client,
                address,
                phone,
                email,
                items,
                save,
                pdf,
                out,
            };
            commands::create::run_create(&cli.database, opts).await?;
        }
        Commands::Invoices { action } => match action {
            InvoiceAction::List => {
                commands::invoices::run_list(&cli.database).await?;
            }
            InvoiceAction::Show { number } => {
                commands::invoices::run_show(&cli.database, &number).await?;
            }
            InvoiceAction::Delete { id } => {
                commands::invoices::run_delete(&cli.database, id).await?;
            }
        },
        Commands::Products { action } => match action {
            ProductAction::Add {
                name,
                quantity,
                price,
            } => {
                commands::products::run_add(&cli.database, &name, quantity, &price).await?;
            }
            ProductAction::List => {
                commands::products::run_list(&cli.database).await?;
            }
        },
    }

    Ok(())
}
