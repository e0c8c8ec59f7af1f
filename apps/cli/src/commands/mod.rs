//! Command implementations for the `quotegen` binary.
//!
//! Each submodule owns one subcommand family and is the only place that
//! wires core, db, and pdf together for that flow.

pub mod create;
pub mod invoices;
pub mod products;

use std::path::Path;

use anyhow::Context;
use quotegen_db::{Database, DbConfig};

/// Opens (and if needed creates) the database at `path`.
///
/// The schema is ensured as part of connecting, so every command sees a
/// ready database.
pub async fn open_database(path: &Path) -> anyhow::Result<Database> {
    Database::new(DbConfig::new(path))
        .await
        .with_context(|| format!("failed to open database at {}", path.display()))
}
