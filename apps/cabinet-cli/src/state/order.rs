//! Parsing of `--item "TYPE|ITEM|QTY"` arguments.

use std::str::FromStr;

use cabinet_catalog::display_type;
use cabinet_core::validation::validate_required;

use crate::error::CliError;

const SEPARATOR: char = '|';

/// One requested cart row, before it is matched against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_type: String,
    pub name: String,
    pub quantity: i64,
}

impl FromStr for OrderLine {
    type Err = CliError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = spec.split(SEPARATOR).collect();
        let (item_type, name, quantity) = match parts.as_slice() {
            [item_type, name] => (*item_type, *name, None),
            [item_type, name, quantity] => (*item_type, *name, Some(*quantity)),
            _ => return Err(CliError::invalid_order(spec, "expected TYPE|ITEM|QTY")),
        };

        let item_type = validate_required(item_type, "type")
            .map_err(|e| CliError::invalid_order(spec, e.to_string()))?;
        let name = validate_required(name, "item")
            .map_err(|e| CliError::invalid_order(spec, e.to_string()))?;

        // Range is checked by the cart
        let quantity = match quantity.map(str::trim) {
            None | Some("") => 1,
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                CliError::invalid_order(spec, format!("quantity \"{raw}\" is not a whole number"))
            })?,
        };

        Ok(OrderLine {
            item_type: display_type(&item_type),
            name,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_spec() {
        let line: OrderLine = " base   cabinets | B12 | 3 ".parse().unwrap();
        assert_eq!(
            line,
            OrderLine {
                item_type: "Base Cabinets".into(),
                name: "B12".into(),
                quantity: 3,
            }
        );
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        assert_eq!("Wall|W3030".parse::<OrderLine>().unwrap().quantity, 1);
        assert_eq!("Wall|W3030|".parse::<OrderLine>().unwrap().quantity, 1);
    }

    #[test]
    fn test_out_of_range_quantity_left_to_cart() {
        assert_eq!("Wall|W3030|0".parse::<OrderLine>().unwrap().quantity, 0);
        assert_eq!("Wall|W3030|1000".parse::<OrderLine>().unwrap().quantity, 1000);
    }

    #[test]
    fn test_malformed_specs() {
        for spec in ["B12", "Base|B12|2|extra", "|B12|1", "Base| |1", "Base|B12|two", "Base|B12|1.5"] {
            let err = spec.parse::<OrderLine>().unwrap_err();
            assert!(
                matches!(err, CliError::InvalidOrder { .. }),
                "{spec}: {err}"
            );
        }
    }

    #[test]
    fn test_error_names_the_argument() {
        let err = "Base|B12|two".parse::<OrderLine>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid item \"Base|B12|two\": quantity \"two\" is not a whole number"
        );
    }
}
