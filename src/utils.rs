use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("number pattern is valid")
});

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").expect("integer pattern is valid"));

/// Scientific, real or integer literal.
pub fn is_numeric_literal(s: &str) -> bool {
    NUMBER.is_match(s)
}

pub fn is_integer_literal(s: &str) -> bool {
    INTEGER.is_match(s)
}

/// `List<scalar>`-style type tag in front of a counted list.
pub fn is_type_tag(s: &str) -> bool {
    s.contains('<') && s.ends_with('>')
}

const DIRECTIVES: [&str; 5] = ["#include", "#includeIfPresent", "#includeEtc", "#includeFunc", "#remove"];

/// Directive keys are written without a trailing `;`.
pub fn is_directive(key: &str) -> bool {
    DIRECTIVES.contains(&key)
}

/// Left-justify `s` to `width` characters, like a padded key column.
pub fn ljust(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_literals() {
        for ok in ["1", "-1", "0.005", "1.23e-4", "-1.2e+3", "+7.8E+12", "9e6", "1.", ".5"] {
            assert!(is_numeric_literal(ok), "{ok} should be numeric");
        }
        for bad in ["1.2.3", "1.23e", "1.23e-", "1.23e+", "", "e5", "startTime"] {
            assert!(!is_numeric_literal(bad), "{bad} should not be numeric");
        }
    }

    #[test]
    fn test_ljust() {
        assert_eq!(ljust("key", 6), "key   ");
        assert_eq!(ljust("longer", 3), "longer");
    }
}
