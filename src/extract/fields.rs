//! Per-field text heuristics.
//!
//! Each rule is a pure `&str -> Option<T>` function; sources combine
//! them with [`first_match`] in their own priority order, first success
//! wins. Keeping them free of source state makes each brittle pattern
//! testable on its own.

use once_cell::sync::Lazy;
use regex::Regex;

/// 1 sqm = 10.7639 sqft; all sources share one unit system.
pub const SQFT_PER_SQM: f64 = 10.7639;

/// Amenity vocabulary; each hit becomes one capitalized tag.
pub const AMENITY_KEYWORDS: &[&str] = &[
    "pool", "gym", "parking", "security", "garden", "lift", "laundry", "balcony", "terrace",
];

static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"KSh\s*([\d,]+(?:\.\d+)?)").unwrap());
static BDRM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*bdrm").unwrap());
static BEDROOM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:bedrooms?|beds?)").unwrap());
static BATHROOM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:bathrooms?|baths?)").unwrap());
static AREA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([\d,]+(?:\.\d+)?)\s*(?:sqm|sq\.?\s*m\b|m²)").unwrap());

/// Tries `rules` in order; the first rule producing a value wins.
pub fn first_match<T>(text: &str, rules: &[fn(&str) -> Option<T>]) -> Option<T> {
    rules.iter().find_map(|rule| rule(text))
}

/// First currency-prefixed numeric token, e.g. "KSh 8,500,000".
pub fn price_kes(text: &str) -> Option<f64> {
    let captures = PRICE_RE.captures(text)?;
    captures[1].replace(',', "").parse().ok()
}

/// Jiji compact form: "3bdrm".
pub fn bedrooms_bdrm(text: &str) -> Option<u32> {
    BDRM_RE.captures(text).and_then(|c| c[1].parse().ok())
}

/// Spelled-out form: "3 Bedrooms", "3 Bed".
pub fn bedrooms_keyword(text: &str) -> Option<u32> {
    BEDROOM_RE.captures(text).and_then(|c| c[1].parse().ok())
}

/// "2 Bathrooms", "2 Bath".
pub fn bathrooms_keyword(text: &str) -> Option<u32> {
    BATHROOM_RE.captures(text).and_then(|c| c[1].parse().ok())
}

/// First numeric token next to an area-unit keyword ("120 sqm",
/// "158 m²"), converted to square feet.
pub fn size_sqft_from_area(text: &str) -> Option<f64> {
    let captures = AREA_RE.captures(text)?;
    let sqm: f64 = captures[1].replace(',', "").parse().ok()?;
    Some(sqm_to_sqft(sqm))
}

/// Square-metre to square-feet conversion, rounded to 2 decimals.
pub fn sqm_to_sqft(sqm: f64) -> f64 {
    (sqm * SQFT_PER_SQM * 100.0).round() / 100.0
}

/// Scans the fixed amenity vocabulary; no hits yields an empty set.
pub fn amenities(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    AMENITY_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(**keyword))
        .map(|keyword| capitalize(keyword))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strips_separators() {
        assert_eq!(price_kes("KSh 8,500,000 for sale"), Some(8_500_000.0));
        assert_eq!(price_kes("KSh 40,000 / month"), Some(40_000.0));
    }

    #[test]
    fn price_requires_currency_prefix() {
        assert_eq!(price_kes("8,500,000 negotiable"), None);
        assert_eq!(price_kes("no price listed"), None);
    }

    #[test]
    fn bedroom_rules_match_their_own_forms() {
        assert_eq!(bedrooms_bdrm("3bdrm apartment"), Some(3));
        assert_eq!(bedrooms_bdrm("3 Bedrooms"), None);
        assert_eq!(bedrooms_keyword("4 Bedroom townhouse"), Some(4));
        assert_eq!(bedrooms_keyword("2 Beds"), Some(2));
    }

    #[test]
    fn bedroom_rules_compose_in_priority_order() {
        let rules: &[fn(&str) -> Option<u32>] = &[bedrooms_bdrm, bedrooms_keyword];
        assert_eq!(first_match("5bdrm mansion", rules), Some(5));
        assert_eq!(first_match("5 Bedroom mansion", rules), Some(5));
        assert_eq!(first_match("bedsitter", rules), None);
    }

    #[test]
    fn bathrooms_default_is_left_to_the_caller() {
        assert_eq!(bathrooms_keyword("2 Bathrooms en-suite"), Some(2));
        assert_eq!(bathrooms_keyword("no bath info"), None);
    }

    #[test]
    fn size_converts_sqm_exactly() {
        // round(X * 10.7639, 2)
        assert_eq!(size_sqft_from_area("120 sqm"), Some(1291.67));
        assert_eq!(size_sqft_from_area("158 m²"), Some(1700.7));
        assert_eq!(sqm_to_sqft(1.0), 10.76);
    }

    #[test]
    fn size_handles_separators_and_absence() {
        assert_eq!(size_sqft_from_area("1,000 sqm plot"), Some(10763.9));
        assert_eq!(size_sqft_from_area("spacious home"), None);
    }

    #[test]
    fn amenity_scan_capitalizes_hits() {
        let found = amenities("Gated community with POOL, gym and ample parking");
        assert_eq!(found, vec!["Pool", "Gym", "Parking"]);
        assert!(amenities("bare unit").is_empty());
    }
}
