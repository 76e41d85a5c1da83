//! Field rules for the product form.
//!
//! The save control is enabled only when both rules hold.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Integer part, then optionally a dot and one or two fractional digits.
///
/// `[0-9]` rather than `\d`: regex `\d` is Unicode-aware and would accept
/// digits from other scripts.
pub const PRICE_PATTERN: &str = r"^[0-9]+(\.[0-9]{1,2})?$";

static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PRICE_PATTERN).expect("price pattern is a valid regex"));

/// Why a pair of field values cannot be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name is empty")]
    EmptyName,

    #[error("price {0:?} is not a decimal with at most two fractional digits")]
    InvalidPrice(String),
}

/// Strips what a browser's `String.prototype.trim` strips, BOM included
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn is_valid_name(name: &str) -> bool {
    !trim_input(name).is_empty()
}

/// Surrounding whitespace is ignored, everything else must match [`PRICE_PATTERN`].
pub fn is_valid_price(price: &str) -> bool {
    PRICE_RE.is_match(trim_input(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_integers_and_two_decimals() {
        assert!(is_valid_price("9"));
        assert!(is_valid_price("9.9"));
        assert!(is_valid_price("9.99"));
        assert!(is_valid_price("0"));
        assert!(is_valid_price("1200.50"));
    }

    #[test]
    fn test_price_rejects_malformed_values() {
        assert!(!is_valid_price(""));
        assert!(!is_valid_price("9.999"));
        assert!(!is_valid_price("9."));
        assert!(!is_valid_price(".99"));
        assert!(!is_valid_price("-1"));
        assert!(!is_valid_price("1,50"));
        assert!(!is_valid_price("1e3"));
        assert!(!is_valid_price("12abc"));
    }

    #[test]
    fn test_price_ignores_surrounding_whitespace() {
        assert!(is_valid_price(" 4.50 "));
        assert!(!is_valid_price("4 .50"));
    }

    #[test]
    fn test_price_rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert!(!is_valid_price("\u{0661}\u{0662}"));
    }

    #[test]
    fn test_price_ignores_pasted_bom() {
        assert!(is_valid_price("\u{FEFF}9.99"));
        assert!(is_valid_price("9.99\u{FEFF}"));
        assert!(!is_valid_price("9\u{FEFF}.99"));
    }

    #[test]
    fn test_name_of_only_bom_is_blank() {
        assert!(!is_valid_name("\u{FEFF}"));
        assert!(!is_valid_name(" \u{FEFF}\n"));
        assert!(is_valid_name("\u{FEFF}Widget"));
    }

    #[test]
    fn test_trim_input() {
        assert_eq!(trim_input("\u{FEFF} Widget\t"), "Widget");
        assert_eq!(trim_input("\u{00A0}4.50\u{2003}"), "4.50");
        assert_eq!(trim_input("a b"), "a b");
    }

    #[test]
    fn test_name_requires_non_blank() {
        assert!(is_valid_name("Widget"));
        assert!(is_valid_name("  Widget "));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   \t"));
    }
}
