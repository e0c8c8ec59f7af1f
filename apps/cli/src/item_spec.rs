//! Parsing of `--item` specs.
//!
//! A spec is `NAME:QTY:UNIT:PRICE`, split from the right so product names
//! may contain colons. Quantity and price stay as raw text here; the
//! ledger owns their validation.

use quotegen_core::Unit;

/// A split but not yet validated `--item` spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    pub product: String,
    pub quantity: String,
    pub unit: Unit,
    pub price: String,
}

/// Splits `NAME:QTY:UNIT:PRICE` into its four fields.
pub fn parse_item_spec(spec: &str) -> Result<ItemSpec, String> {
    // rsplitn yields fields right-to-left: price, unit, qty, name
    let mut fields = spec.rsplitn(4, ':');
    let price = fields.next();
    let unit = fields.next();
    let quantity = fields.next();
    let product = fields.next();

    match (product, quantity, unit, price) {
        (Some(product), Some(quantity), Some(unit), Some(price)) => {
            let unit: Unit = unit.parse()?;
            Ok(ItemSpec {
                product: product.to_string(),
                quantity: quantity.to_string(),
                unit,
                price: price.to_string(),
            })
        }
        _ => Err(format!(
            "invalid item spec '{spec}' (expected NAME:QTY:UNIT:PRICE)"
        )),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_basic_spec() {
        let spec = parse_item_spec("Cat-6 cable:40:set:1,100.00").unwrap();
        assert_eq!(spec.product, "Cat-6 cable");
        assert_eq!(spec.quantity, "40");
        assert_eq!(spec.unit, Unit::Set);
        assert_eq!(spec.price, "1,100.00");
    }

    #[test]
    fn test_product_name_may_contain_colons() {
        let spec = parse_item_spec("Adapter: USB-C to HDMI:2:dzn:500").unwrap();
        assert_eq!(spec.product, "Adapter: USB-C to HDMI");
        assert_eq!(spec.quantity, "2");
    }

    #[test]
    fn test_decimal_quantity() {
        let spec = parse_item_spec("Rope:1.5:dzn:250").unwrap();
        assert_eq!(spec.quantity, "1.5");
    }

    #[test]
    fn test_too_few_fields_is_rejected() {
        assert!(parse_item_spec("Widget:2:set").is_err());
        assert!(parse_item_spec("Widget").is_err());
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        let err = parse_item_spec("Widget:2:box:100").unwrap_err();
        assert!(err.contains("unknown unit"));
    }
}
