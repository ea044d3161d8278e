//! Type label cleanup.
//!
//! The sheet's `TYPES` column is typed by hand: "BASE CABINETS ", "base
//! cabinets", "Base Cabinets" all mean the same group. Labels are trimmed and
//! lower-cased to group them, then title-cased for display.

/// Grouping key for a type label: trimmed, inner whitespace collapsed,
/// lower-cased.
pub fn normalize_type(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Capitalizes the first letter of every word and lower-cases the rest.
///
/// A word starts after any non-alphabetic character, so "base/wall" becomes
/// "Base/Wall" and "36in" stays "36In".
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for c in label.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Display label for a raw `TYPES` cell.
pub fn display_type(raw: &str) -> String {
    title_case(&normalize_type(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_type() {
        assert_eq!(normalize_type("  BASE   Cabinets "), "base cabinets");
        assert_eq!(normalize_type("wall"), "wall");
        assert_eq!(normalize_type("   "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("base cabinets"), "Base Cabinets");
        assert_eq!(title_case("base/wall"), "Base/Wall");
        assert_eq!(title_case("36in tall"), "36In Tall");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }

    #[test]
    fn test_display_type() {
        assert_eq!(display_type(" VANITY  cabinets"), "Vanity Cabinets");
    }
}
