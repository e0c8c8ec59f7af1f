//! # quotegen-core: Pure Business Logic for Quotegen
//!
//! This crate is the **heart** of Quotegen. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quotegen Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (CLI / form input)                  │   │
//! │  │    client fields ──► item fields ──► Save / Generate PDF        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quotegen-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │  Ledger   │  │   rules   │  │   │
//! │  │   │ Document  │  │ VAT calc  │  │ add/remove│  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                           │   │
//! │  │                        │ assemble  │  ledger ──► Document      │   │
//! │  │                        └───────────┘                           │   │
//! │  │   NO I/O • NO DATABASE • NO FILE SYSTEM • PURE FUNCTIONS       │   │
//! │  └──────────────┬──────────────────────────────┬──────────────────┘   │
//! │                 │                              │                       │
//! │  ┌──────────────▼───────────┐   ┌──────────────▼──────────────────┐   │
//! │  │  quotegen-db (SQLite)    │   │  quotegen-pdf (printpdf)        │   │
//! │  │  saves Document snapshot │   │  renders Document snapshot      │   │
//! │  └──────────────────────────┘   └─────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, Document, Unit, DocumentType)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - The in-memory ordered line-item collection
//! - [`assemble`] - Snapshot of header + ledger into a Document
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quotegen_core::money::Money;
//! use quotegen_core::types::{TaxRate, Unit};
//! use quotegen_core::ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.add("Widget", "2", Unit::Set, "500").unwrap();
//! ledger.add("Gadget", "1", Unit::Dzn, "1200").unwrap();
//!
//! // Subtotal 2,200.00; VAT at 16% is 352.00
//! let subtotal = ledger.running_total();
//! assert_eq!(subtotal, Money::from_cents(220_000));
//! assert_eq!(subtotal.calculate_tax(quotegen_core::vat_rate()).cents(), 35_200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod assemble;
pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quotegen_core::Money` instead of
// `use quotegen_core::money::Money`

pub use assemble::{assemble, generate_document_number, DocumentHeader};
pub use error::{CoreError, ValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// VAT rate applied to the subtotal, in basis points (1600 = 16%).
///
/// ## Why a constant?
/// The tax regime is fixed for every document this system produces.
/// Per-document rates would need a schema change, which is out of scope.
pub const VAT_RATE_BPS: u32 = 1600;

/// Maximum items allowed in a single ledger
///
/// ## Business Reason
/// Bounds runaway documents (e.g. a scripted caller looping on `add`).
/// It is NOT a page-fit guarantee: the PDF layout is fixed-coordinate and
/// does not paginate, so rows beyond roughly 20 render below the totals
/// block and off the page. That overflow is a known limitation of the
/// fixed single-page layout, kept as-is.
pub const MAX_LEDGER_ITEMS: usize = 100;

/// Prefix applied to every generated document number.
pub const NUMBER_PREFIX: &str = "QTN-";

/// Length of the random uppercase token in a document number.
pub const NUMBER_TOKEN_LEN: usize = 8;

/// Returns the fixed VAT rate as a [`types::TaxRate`].
#[inline]
pub fn vat_rate() -> types::TaxRate {
    types::TaxRate::from_bps(VAT_RATE_BPS)
}
