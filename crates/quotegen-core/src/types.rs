//! # Domain Types
//!
//! Core domain types used throughout Quotegen.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    Document     │   │  ClientDetails  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product        │   │  document_type  │   │  name (required)│       │
//! │  │  quantity       │   │  number (uniq)  │   │  address        │       │
//! │  │  unit           │   │  client         │   │  phone          │       │
//! │  │  unit_price     │   │  items          │   │  email          │       │
//! │  └─────────────────┘   │  total_amount   │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  DocumentType   │   │      Unit       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Quotation      │   │  Dzn            │       │
//! │  │  1600 = 16%     │   │  Invoice        │   │  Set            │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;
use crate::vat_rate;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1600 bps = 16% (Kenyan VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Document Type
// =============================================================================

/// The kind of document being composed.
///
/// Both kinds share the same schema, layout, and lifecycle; the type only
/// changes the title line on the PDF and the stored `document_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// A price quotation (the default at form-open time).
    Quotation,
    /// An invoice.
    Invoice,
}

impl DocumentType {
    /// Stable text form, as stored in the database and used in filenames.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Quotation => "Quotation",
            DocumentType::Invoice => "Invoice",
        }
    }
}

impl Default for DocumentType {
    fn default() -> Self {
        DocumentType::Quotation
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quotation" => Ok(DocumentType::Quotation),
            "invoice" => Ok(DocumentType::Invoice),
            other => Err(format!("unknown document type: {other}")),
        }
    }
}

// =============================================================================
// Unit
// =============================================================================

/// Unit of measure for a line item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Dozens.
    Dzn,
    /// Sets.
    Set,
}

impl Unit {
    /// Stable text form, as stored in the database and shown in the table.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Dzn => "dzn",
            Unit::Set => "set",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Dzn
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dzn" => Ok(Unit::Dzn),
            "set" => Ok(Unit::Set),
            other => Err(format!("unknown unit: {other} (expected dzn or set)")),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product/service entry with quantity, unit, unit price, and derived total.
///
/// Immutable once added to the ledger: there is no edit-in-place, only
/// remove and re-add. The total is always derived, never stored, so it can
/// not drift from quantity × unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product or service description.
    pub product: String,

    /// Ordered quantity. Positive decimal ("1.5 dzn" is valid).
    pub quantity: f64,

    /// Unit of measure.
    pub unit: Unit,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Derived line total: quantity × unit price, rounded to a cent.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_decimal(self.quantity)
    }

    /// Quantity rendered without a spurious trailing `.0`.
    ///
    /// `2.0` prints as `2`; `1.5` prints as `1.5`.
    pub fn quantity_label(&self) -> String {
        if self.quantity.fract() == 0.0 {
            format!("{}", self.quantity as i64)
        } else {
            format!("{}", self.quantity)
        }
    }
}

// =============================================================================
// Client Details
// =============================================================================

/// Client header fields for a document.
///
/// Only the name is required; the remaining contact fields are optional
/// free text carried through to storage and the PDF client block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ClientDetails {
    /// Creates client details with only the required name set.
    pub fn named(name: impl Into<String>) -> Self {
        ClientDetails {
            name: name.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// Document
// =============================================================================

/// A quotation or invoice header plus its line items.
///
/// The exportable/persistable unit. Always produced by
/// [`crate::assemble::assemble`], which guarantees the invariants:
/// non-empty client name, non-empty item list, and
/// `total_amount == Σ line_total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Quotation or Invoice.
    pub document_type: DocumentType,

    /// Unique document number, e.g. `QTN-3F9A21BC`.
    pub number: String,

    /// Client header block.
    pub client: ClientDetails,

    /// Ordered line items (never empty).
    pub items: Vec<LineItem>,

    /// Sum of all line totals in cents, frozen at assembly time.
    pub total_amount_cents: i64,

    /// When the document was assembled.
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Subtotal before tax, as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }

    /// VAT at the fixed 16% rate, applied to the subtotal.
    #[inline]
    pub fn vat(&self) -> Money {
        self.subtotal().calculate_tax(vat_rate())
    }

    /// Grand total: subtotal + VAT.
    #[inline]
    pub fn grand_total(&self) -> Money {
        self.subtotal() + self.vat()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1600);
        assert_eq!(rate.bps(), 1600);
        assert!((rate.percentage() - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_document_type_round_trip() {
        assert_eq!("quotation".parse::<DocumentType>().unwrap(), DocumentType::Quotation);
        assert_eq!("Invoice".parse::<DocumentType>().unwrap(), DocumentType::Invoice);
        assert!("receipt".parse::<DocumentType>().is_err());
        assert_eq!(DocumentType::Quotation.to_string(), "Quotation");
    }

    #[test]
    fn test_unit_round_trip() {
        assert_eq!("dzn".parse::<Unit>().unwrap(), Unit::Dzn);
        assert_eq!("SET".parse::<Unit>().unwrap(), Unit::Set);
        assert!("each".parse::<Unit>().is_err());
    }

    #[test]
    fn test_line_item_total() {
        let item = LineItem {
            product: "Widget".to_string(),
            quantity: 2.0,
            unit: Unit::Set,
            unit_price_cents: 50_000,
        };
        assert_eq!(item.line_total().cents(), 100_000);
    }

    #[test]
    fn test_quantity_label() {
        let mut item = LineItem {
            product: "Widget".to_string(),
            quantity: 2.0,
            unit: Unit::Set,
            unit_price_cents: 50_000,
        };
        assert_eq!(item.quantity_label(), "2");

        item.quantity = 1.5;
        assert_eq!(item.quantity_label(), "1.5");
    }

    #[test]
    fn test_document_vat_and_grand_total() {
        let doc = Document {
            document_type: DocumentType::Quotation,
            number: "QTN-TEST0001".to_string(),
            client: ClientDetails::named("Acme Ltd"),
            items: vec![LineItem {
                product: "Widget".to_string(),
                quantity: 2.0,
                unit: Unit::Set,
                unit_price_cents: 50_000,
            }],
            total_amount_cents: 220_000,
            created_at: Utc::now(),
        };

        assert_eq!(doc.subtotal().cents(), 220_000);
        assert_eq!(doc.vat().cents(), 35_200);
        assert_eq!(doc.grand_total().cents(), 255_200);
    }
}
