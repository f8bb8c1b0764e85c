//! Salary and experience value extraction
//!
//! Snapshot data carries salary and experience as free text in several
//! shapes. These extractors reduce them to comparable numbers used purely
//! for sort ordering; display formatting stays with the caller. Unparsable
//! input degrades to a sentinel that sorts last, never to an error.

use regex::Regex;
use std::sync::OnceLock;

/// Sort value for a listing with no usable salary text. Sorts last under
/// the descending highest-salary-first ordering.
pub const UNKNOWN_SALARY: f64 = -1.0;

/// Offset applied to single-point salary values so that ranges sort ahead
/// of point values sharing the same minimum. Exact constant is load-bearing
/// for the ordering contract.
const POINT_OFFSET: f64 = 0.5;

fn dict_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)['"]?amount['"]?\s*:\s*['"]?(\d+(?:\.\d+)?)"#)
            .expect("dict amount pattern")
    })
}

fn range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(k?)\s*[-–—]\s*(\d+(?:\.\d+)?)\s*(k?)")
            .expect("salary range pattern")
    })
}

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(k?)").expect("salary amount pattern"))
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("digit run pattern"))
}

/// Experience text reduced to a years value for ascending ordering.
///
/// The first run of digits is taken as the years ("3-5 years" → 3); absent
/// or digit-free text sorts last via `+∞`.
pub fn experience_value(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return f64::INFINITY;
    };

    digits_re()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::INFINITY)
}

/// Salary text reduced to a sort value for descending ordering.
///
/// Shapes, checked in order:
/// - dict-like text with an `amount` key → amount + 0.5
/// - a range `<min>[K]-<max>[K]` (`-`, `–` or `—`) → the minimum bound
/// - a single amount with optional `K` suffix → value + 0.5
/// - anything else → [`UNKNOWN_SALARY`]
///
/// Currency symbols and thousands separators are stripped before parsing;
/// a `K` suffix means ×1000 regardless of case.
pub fn salary_value(text: Option<&str>) -> f64 {
    let Some(raw) = text else {
        return UNKNOWN_SALARY;
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥' | '₹' | ','))
        .collect();

    if let Some(captures) = dict_amount_re().captures(&cleaned) {
        if let Ok(amount) = captures[1].parse::<f64>() {
            return amount + POINT_OFFSET;
        }
    }

    if let Some(captures) = range_re().captures(&cleaned) {
        if let Ok(min) = captures[1].parse::<f64>() {
            return scale(min, &captures[2]);
        }
    }

    if let Some(captures) = amount_re().captures(&cleaned) {
        if let Ok(amount) = captures[1].parse::<f64>() {
            return scale(amount, &captures[2]) + POINT_OFFSET;
        }
    }

    UNKNOWN_SALARY
}

fn scale(amount: f64, k_suffix: &str) -> f64 {
    if k_suffix.is_empty() {
        amount
    } else {
        amount * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_first_digit_run() {
        assert_eq!(experience_value(Some("5 years")), 5.0);
        assert_eq!(experience_value(Some("2-4 years")), 2.0);
        assert_eq!(experience_value(Some("10+ years experience")), 10.0);
    }

    #[test]
    fn test_experience_unknown_sorts_last() {
        assert_eq!(experience_value(None), f64::INFINITY);
        assert_eq!(experience_value(Some("entry level")), f64::INFINITY);
        assert_eq!(experience_value(Some("")), f64::INFINITY);
    }

    #[test]
    fn test_salary_absent_or_unparsable() {
        assert_eq!(salary_value(None), -1.0);
        assert_eq!(salary_value(Some("competitive")), -1.0);
        assert_eq!(salary_value(Some("")), -1.0);
    }

    #[test]
    fn test_salary_range_takes_minimum_unscaled_by_offset() {
        assert_eq!(salary_value(Some("$145K-$175K")), 145_000.0);
        assert_eq!(salary_value(Some("145k-175k")), 145_000.0);
        assert_eq!(salary_value(Some("140,000-160,000")), 140_000.0);
    }

    #[test]
    fn test_salary_range_dash_variants() {
        assert_eq!(salary_value(Some("145K–175K")), 145_000.0);
        assert_eq!(salary_value(Some("145K—175K")), 145_000.0);
    }

    #[test]
    fn test_salary_single_value_gets_point_offset() {
        assert_eq!(salary_value(Some("$150K")), 150_000.5);
        assert_eq!(salary_value(Some("98000")), 98_000.5);
        assert_eq!(salary_value(Some("120,000")), 120_000.5);
    }

    #[test]
    fn test_salary_dict_amount() {
        assert_eq!(
            salary_value(Some("{'unit': 'USD', 'amount': '140900.0'}")),
            140_900.5
        );
        assert_eq!(
            salary_value(Some(r#"{"unit": "EUR", "amount": "88000"}"#)),
            88_000.5
        );
    }

    #[test]
    fn test_salary_range_sorts_ahead_of_point_at_same_minimum() {
        let range = salary_value(Some("$150K-$180K"));
        let point = salary_value(Some("$150K"));
        // descending order puts the point value first
        assert!(point > range);
        assert_eq!(point - range, 0.5);
    }

    #[test]
    fn test_salary_ordering_from_mixed_shapes() {
        // exact numeric outputs per the extraction formulas
        let range = salary_value(Some("$145K-$175K")); // 145000
        let point = salary_value(Some("$150K")); // 150000.5
        let dict = salary_value(Some("{'unit': 'USD', 'amount': '160000.0'}")); // 160000.5
        let unknown = salary_value(None); // -1

        assert_eq!(range, 145_000.0);
        assert_eq!(point, 150_000.5);
        assert_eq!(dict, 160_000.5);
        assert_eq!(unknown, -1.0);
        assert!(dict > point && point > range && range > unknown);
    }
}
