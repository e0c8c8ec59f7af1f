//! # Line-Item Ledger
//!
//! The in-memory ordered collection of line items being composed for the
//! current document.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Frontend Action          Ledger Call              State Change         │
//! │  ───────────────          ───────────              ────────────         │
//! │                                                                         │
//! │  "Add Item" ─────────────► add() ────────────────► items.push(item)    │
//! │                                                                         │
//! │  "Remove Item" ──────────► remove(index) ────────► items.remove(i)     │
//! │                                                                         │
//! │  "Clear All" (confirmed) ─► clear() ─────────────► items.clear()       │
//! │                                                                         │
//! │  Total label ────────────► running_total() ──────► (read only)         │
//! │                                                                         │
//! │  NOTE: confirmation for "Clear All" belongs to the calling layer;       │
//! │        the ledger itself never prompts.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The ledger exclusively owns its line items until a snapshot is handed to
//! the assembler. The gateway and renderer only ever see that snapshot.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::types::{LineItem, Unit};
use crate::validation::{parse_quantity, parse_unit_price, validate_product_name};
use crate::MAX_LEDGER_ITEMS;

/// The in-memory ordered list of items for the document being edited.
///
/// ## Invariants
/// - Items keep their insertion order; `remove` never reorders survivors
/// - Every held item passed validation on the way in
/// - The running total is recomputed from items on demand, never cached
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Ledger { items: Vec::new() }
    }

    /// Validates raw item fields and appends a line item.
    ///
    /// ## Arguments
    /// Quantity and price arrive as raw text straight from the input form.
    ///
    /// ## Returns
    /// A clone of the appended item on success (so the caller can show the
    /// computed [`LineItem::line_total`]). On failure the ledger is
    /// untouched.
    ///
    /// ## Example
    /// ```rust
    /// use quotegen_core::ledger::Ledger;
    /// use quotegen_core::types::Unit;
    ///
    /// let mut ledger = Ledger::new();
    /// let item = ledger.add("Widget", "2", Unit::Set, "500").unwrap();
    /// assert_eq!(item.line_total().cents(), 100_000);
    ///
    /// // Bad input leaves the ledger unchanged
    /// assert!(ledger.add("", "2", Unit::Set, "100").is_err());
    /// assert_eq!(ledger.len(), 1);
    /// ```
    pub fn add(
        &mut self,
        product: &str,
        quantity_text: &str,
        unit: Unit,
        price_text: &str,
    ) -> Result<LineItem, ValidationError> {
        let product = validate_product_name(product)?;
        let quantity = parse_quantity(quantity_text)?;
        let unit_price = parse_unit_price(price_text)?;

        if self.items.len() >= MAX_LEDGER_ITEMS {
            return Err(ValidationError::OutOfRange {
                field: "ledger items".to_string(),
                min: 0,
                max: MAX_LEDGER_ITEMS as i64,
            });
        }

        let item = LineItem {
            product,
            quantity,
            unit,
            unit_price_cents: unit_price.cents(),
        };

        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes the item at `index`.
    ///
    /// ## Behavior
    /// - Out-of-bounds index fails without touching the ledger
    /// - Remaining items keep their relative order
    pub fn remove(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        self.items.remove(index);
        Ok(())
    }

    /// Empties the ledger.
    ///
    /// The calling layer is responsible for asking the user to confirm
    /// before invoking this.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all current item totals.
    ///
    /// Recomputed from the items on every call; there is no cached total
    /// that could go stale after a mutation.
    pub fn running_total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Read-only view of the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of items in the ledger.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_computes_line_total() {
        let mut ledger = Ledger::new();

        let widget = ledger.add("Widget", "2", Unit::Set, "500.00").unwrap();
        assert_eq!(widget.line_total().cents(), 100_000);

        let gadget = ledger.add("Gadget", "1", Unit::Dzn, "1200.00").unwrap();
        assert_eq!(gadget.line_total().cents(), 120_000);

        // Subtotal 2,200.00
        assert_eq!(ledger.running_total(), Money::from_cents(220_000));
    }

    #[test]
    fn test_running_total_matches_input_order_sum() {
        let mut ledger = Ledger::new();
        ledger.add("A", "3", Unit::Dzn, "10.10").unwrap();
        ledger.add("B", "1.5", Unit::Set, "20").unwrap();
        ledger.add("C", "2", Unit::Set, "0.05").unwrap();

        let expected: Money = ledger.items().iter().map(LineItem::line_total).sum();
        assert_eq!(ledger.running_total(), expected);
        assert_eq!(expected.cents(), 3030 + 3000 + 10);
    }

    #[test]
    fn test_add_rejects_bad_input_without_mutation() {
        let mut ledger = Ledger::new();

        assert!(ledger.add("", "2", Unit::Set, "100").is_err());
        assert!(ledger.add("Widget", "", Unit::Set, "100").is_err());
        assert!(ledger.add("Widget", "2", Unit::Set, "").is_err());
        assert!(ledger.add("Widget", "abc", Unit::Set, "100").is_err());
        assert!(ledger.add("Widget", "2", Unit::Set, "-5").is_err());

        assert!(ledger.is_empty());
        assert_eq!(ledger.running_total(), Money::zero());
    }

    #[test]
    fn test_remove_keeps_order_and_excludes_total() {
        let mut ledger = Ledger::new();
        ledger.add("First", "1", Unit::Set, "100").unwrap();
        ledger.add("Second", "1", Unit::Set, "200").unwrap();
        ledger.add("Third", "1", Unit::Set, "300").unwrap();

        ledger.remove(1).unwrap();

        let names: Vec<&str> = ledger.items().iter().map(|i| i.product.as_str()).collect();
        assert_eq!(names, vec!["First", "Third"]);
        assert_eq!(ledger.running_total().cents(), 40_000);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut ledger = Ledger::new();
        ledger.add("Only", "1", Unit::Set, "100").unwrap();

        let err = ledger.remove(5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfBounds { index: 5, len: 1 }
        ));
        assert_eq!(ledger.len(), 1);

        // Empty ledger: any index is out of bounds
        let mut empty = Ledger::new();
        assert!(empty.remove(0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut ledger = Ledger::new();
        ledger.add("Widget", "2", Unit::Set, "500").unwrap();
        assert!(!ledger.is_empty());

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.running_total(), Money::zero());
    }

    #[test]
    fn test_ledger_cap() {
        let mut ledger = Ledger::new();
        for i in 0..MAX_LEDGER_ITEMS {
            ledger
                .add(&format!("Item {i}"), "1", Unit::Set, "1")
                .unwrap();
        }
        assert!(ledger.add("One too many", "1", Unit::Set, "1").is_err());
        assert_eq!(ledger.len(), MAX_LEDGER_ITEMS);
    }
}
