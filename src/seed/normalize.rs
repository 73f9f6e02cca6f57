//! Canonicalization of heterogeneous raw field shapes
//!
//! Source data quality is inconsistent; a malformed field degrades to a
//! neutral value instead of failing the record. Nothing here returns an
//! error or panics.

use crate::dataset::{StatValue, StringOrList};

/// Collapse a raw stat field to a single representative scalar.
///
/// A per-level list is reduced to its minimum valid entry; anything
/// unparseable becomes 0.
pub fn normalize_stat(value: &StatValue) -> f64 {
    match value {
        StatValue::Many(items) => items
            .iter()
            .filter_map(parse_scalar)
            .fold(None, |min: Option<f64>, v| {
                Some(min.map_or(v, |m| m.min(v)))
            })
            .unwrap_or(0.0),
        scalar => parse_scalar(scalar).unwrap_or(0.0),
    }
}

fn parse_scalar(value: &StatValue) -> Option<f64> {
    match value {
        StatValue::Number(n) if n.is_finite() => Some(*n),
        StatValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Collapse a raw behavior field to a list of labels.
pub fn normalize_behaviors(value: &Option<StringOrList>) -> Vec<String> {
    value.clone().map(StringOrList::into_vec).unwrap_or_default()
}

/// Title-case a free-text label, e.g. "magical" -> "Magical".
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_reduces_to_minimum() {
        let v = StatValue::Many(vec![
            StatValue::Number(3.0),
            StatValue::Number(5.0),
            StatValue::Number(7.0),
        ]);
        assert_eq!(normalize_stat(&v), 3.0);
    }

    #[test]
    fn test_absent_is_zero() {
        assert_eq!(normalize_stat(&StatValue::Absent), 0.0);
    }

    #[test]
    fn test_numeric_string_parses() {
        assert_eq!(normalize_stat(&StatValue::Text("4.5".to_string())), 4.5);
    }

    #[test]
    fn test_list_filters_unparseable_entries() {
        let v = StatValue::Many(vec![
            StatValue::Text("x".to_string()),
            StatValue::Text("2".to_string()),
        ]);
        assert_eq!(normalize_stat(&v), 2.0);
    }

    #[test]
    fn test_garbage_degrades_to_zero() {
        assert_eq!(normalize_stat(&StatValue::Text("n/a".to_string())), 0.0);
        assert_eq!(normalize_stat(&StatValue::Toggle(false)), 0.0);
        assert_eq!(normalize_stat(&StatValue::Many(vec![])), 0.0);
        assert_eq!(normalize_stat(&StatValue::Number(f64::NAN)), 0.0);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("magical"), "Magical");
        assert_eq!(title_case("pure damage"), "Pure Damage");
        assert_eq!(title_case(""), "");
    }
}
