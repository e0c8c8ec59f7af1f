//! # Document Assembler
//!
//! Snapshots header fields plus the ledger into a single [`Document`] value
//! ready for persistence or export.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  form fields ──► DocumentHeader ──┐                                     │
//! │                                   ├──► assemble() ──► Document          │
//! │  Ledger ─────────(snapshot)───────┘         │                           │
//! │                                             ├──► quotegen-db  (save)    │
//! │                                             └──► quotegen-pdf (print)   │
//! │                                                                         │
//! │  Both consumers are read-only: assemble() is the last mutation point.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Document Numbers
//! Numbers are pre-assigned at form-open time as `QTN-` plus a random
//! 8-character uppercase token. Randomness alone does NOT guarantee
//! uniqueness; callers must verify the candidate against storage
//! (`number_exists`) and regenerate on collision before committing.

use chrono::Utc;
use uuid::Uuid;

use crate::error::CoreError;
use crate::ledger::Ledger;
use crate::types::{ClientDetails, Document, DocumentType};
use crate::validation::validate_client_name;
use crate::{NUMBER_PREFIX, NUMBER_TOKEN_LEN};

// =============================================================================
// Document Header
// =============================================================================

/// Header fields gathered from the input form before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    /// Quotation or Invoice.
    pub document_type: DocumentType,

    /// Pre-assigned document number (see [`generate_document_number`]).
    pub number: String,

    /// Client block; only the name is required.
    pub client: ClientDetails,
}

// =============================================================================
// Assembly
// =============================================================================

/// Assembles a [`Document`] from header fields and a ledger snapshot.
///
/// Pure function: generates no identifiers and performs no I/O.
///
/// ## Failure Modes
/// - Empty client name → validation error
/// - Empty ledger → [`CoreError::EmptyLedger`]
///
/// On success the document's `total_amount_cents` equals the ledger's
/// running total at this moment, and `created_at` is stamped with now.
///
/// ## Example
/// ```rust
/// use quotegen_core::assemble::{assemble, DocumentHeader};
/// use quotegen_core::ledger::Ledger;
/// use quotegen_core::types::{ClientDetails, DocumentType, Unit};
///
/// let mut ledger = Ledger::new();
/// ledger.add("Widget", "2", Unit::Set, "500").unwrap();
///
/// let header = DocumentHeader {
///     document_type: DocumentType::Quotation,
///     number: "QTN-3F9A21BC".to_string(),
///     client: ClientDetails::named("Acme Ltd"),
/// };
///
/// let doc = assemble(header, &ledger).unwrap();
/// assert_eq!(doc.total_amount_cents, 100_000);
/// ```
pub fn assemble(header: DocumentHeader, ledger: &Ledger) -> Result<Document, CoreError> {
    let client_name = validate_client_name(&header.client.name)?;

    if ledger.is_empty() {
        return Err(CoreError::EmptyLedger);
    }

    Ok(Document {
        document_type: header.document_type,
        number: header.number,
        client: ClientDetails {
            name: client_name,
            address: header.client.address,
            phone: header.client.phone,
            email: header.client.email,
        },
        items: ledger.items().to_vec(),
        total_amount_cents: ledger.running_total().cents(),
        created_at: Utc::now(),
    })
}

// =============================================================================
// Number Generation
// =============================================================================

/// Generates a candidate document number: `QTN-` + 8 uppercase hex chars.
///
/// ## Collision Handling
/// The token is random, not sequential, so two candidates CAN collide.
/// The controller must check the candidate with the gateway's
/// `number_exists` and call this again on a hit; the unique index on
/// `quotation_number` is the final backstop.
///
/// ## Example
/// ```rust
/// use quotegen_core::assemble::generate_document_number;
///
/// let number = generate_document_number();
/// assert!(number.starts_with("QTN-"));
/// assert_eq!(number.len(), 12);
/// ```
pub fn generate_document_number() -> String {
    let token: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(NUMBER_TOKEN_LEN)
        .collect();

    format!("{}{}", NUMBER_PREFIX, token.to_uppercase())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Unit;

    fn header(client_name: &str) -> DocumentHeader {
        DocumentHeader {
            document_type: DocumentType::Quotation,
            number: "QTN-TEST0001".to_string(),
            client: ClientDetails::named(client_name),
        }
    }

    #[test]
    fn test_assemble_snapshots_ledger() {
        let mut ledger = Ledger::new();
        ledger.add("Widget", "2", Unit::Set, "500.00").unwrap();
        ledger.add("Gadget", "1", Unit::Dzn, "1200.00").unwrap();

        let doc = assemble(header("Acme Ltd"), &ledger).unwrap();

        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.total_amount_cents, 220_000);
        assert_eq!(doc.total_amount_cents, ledger.running_total().cents());
        assert_eq!(doc.client.name, "Acme Ltd");

        // Snapshot: later ledger edits do not touch the document
        ledger.clear();
        assert_eq!(doc.items.len(), 2);
    }

    #[test]
    fn test_assemble_rejects_empty_ledger() {
        let ledger = Ledger::new();
        let err = assemble(header("Acme Ltd"), &ledger).unwrap_err();
        assert!(matches!(err, CoreError::EmptyLedger));
    }

    #[test]
    fn test_assemble_rejects_empty_client_name() {
        let mut ledger = Ledger::new();
        ledger.add("Widget", "1", Unit::Set, "100").unwrap();

        let err = assemble(header("   "), &ledger).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_assemble_trims_client_name() {
        let mut ledger = Ledger::new();
        ledger.add("Widget", "1", Unit::Set, "100").unwrap();

        let doc = assemble(header("  Acme Ltd  "), &ledger).unwrap();
        assert_eq!(doc.client.name, "Acme Ltd");
    }

    #[test]
    fn test_generate_document_number_shape() {
        for _ in 0..32 {
            let number = generate_document_number();
            assert!(number.starts_with(NUMBER_PREFIX));

            let token = &number[NUMBER_PREFIX.len()..];
            assert_eq!(token.len(), NUMBER_TOKEN_LEN);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_generated_numbers_vary() {
        let a = generate_document_number();
        let b = generate_document_number();
        // Not a uniqueness guarantee, but identical back-to-back tokens
        // would mean the randomness source is broken.
        assert_ne!(a, b);
    }
}
