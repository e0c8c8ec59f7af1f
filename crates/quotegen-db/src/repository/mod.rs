//! # Repository Module
//!
//! Database repository implementations for Quotegen.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Frontend                                                              │
//! │       │                                                                 │
//! │       │  db.invoices().save(&document)                                 │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  InvoiceRepository                                                     │
//! │  ├── save(&self, document)         one transaction, all-or-nothing    │
//! │  ├── list_all(&self)                                                   │
//! │  ├── find_by_number(&self, number)                                     │
//! │  └── get_items(&self, invoice_id)                                      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Typed rows at the boundary, domain types everywhere else            │
//! │  • One logical schema, swappable concrete engine                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`invoice::InvoiceRepository`] - Document save/list and item rows
//! - [`product::ProductRepository`] - The isolated product add/list feature

pub mod invoice;
pub mod product;
