// src/record.rs
//
// The one record type both halves agree on.
// Collector builds these from listing pages; the dashboard loads them back
// from the delimited file.

use std::fmt;
use std::str::FromStr;

use crate::config::consts::IN_STOCK_MARKER;

/// Five-step ordinal rating, surfaced on the site as a word label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::One, Rating::Two, Rating::Three, Rating::Four, Rating::Five];

    pub fn value(self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }

    pub fn from_value(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v).checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::One => "One",
            Rating::Two => "Two",
            Rating::Three => "Three",
            Rating::Four => "Four",
            Rating::Five => "Five",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRating(pub String);

impl fmt::Display for UnknownRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rating label {:?}", self.0)
    }
}

impl std::error::Error for UnknownRating {}

impl FromStr for Rating {
    type Err = UnknownRating;

    /// Exact labels only ("One".."Five"), surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.label() == t)
            .ok_or_else(|| UnknownRating(s!(t)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub price: f64,
    pub availability: String,
    pub rating: Rating,
    /// Present when the source file (or the collector) carries a category column.
    pub category: Option<String>,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, price: f64, availability: impl Into<String>, rating: Rating) -> Self {
        Self {
            title: title.into(),
            price,
            availability: availability.into(),
            rating,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[inline]
    pub fn rating_numeric(&self) -> u8 { self.rating.value() }

    #[inline]
    pub fn in_stock(&self) -> bool { in_stock(&self.availability) }
}

/// Case-sensitive substring test against the site's stock phrase.
pub fn in_stock(availability: &str) -> bool {
    availability.contains(IN_STOCK_MARKER)
}

/// Price text to a non-negative decimal. Leading currency glyphs are dropped
/// ("£51.77", "Â£51.77" and "51.77" all give 51.77).
pub fn parse_price(text: &str) -> Option<f64> {
    let t = text.trim();
    let digits = t.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.');
    // A minus sign is not a digit, so "-3" would silently lose its sign above.
    if t[..t.len() - digits.len()].contains('-') {
        return None;
    }
    let v: f64 = digits.trim().parse().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_mapping_is_a_bijection_onto_one_to_five() {
        let values: Vec<u8> = Rating::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        for r in Rating::ALL {
            assert_eq!(Rating::from_value(r.value()), Some(r));
            assert_eq!(r.label().parse::<Rating>(), Ok(r));
        }
        assert_eq!(Rating::from_value(0), None);
        assert_eq!(Rating::from_value(6), None);
    }

    #[test]
    fn unknown_rating_labels_are_rejected() {
        assert!("Zero".parse::<Rating>().is_err());
        assert!("three".parse::<Rating>().is_err());
        assert!("".parse::<Rating>().is_err());
        assert_eq!(" Four ".parse::<Rating>(), Ok(Rating::Four));
    }

    #[test]
    fn in_stock_is_a_case_sensitive_substring_test() {
        assert!(in_stock("In stock"));
        assert!(in_stock("In stock (22 available)"));
        assert!(!in_stock("Stock out"));
        assert!(!in_stock("in stock"));
        assert!(!in_stock(""));
    }

    #[test]
    fn price_strips_currency_prefix() {
        assert_eq!(parse_price("£51.77"), Some(51.77));
        assert_eq!(parse_price("Â£51.77"), Some(51.77));
        assert_eq!(parse_price("  13.99 "), Some(13.99));
        assert_eq!(parse_price("0"), Some(0.0));
    }

    #[test]
    fn price_rejects_garbage_and_negatives() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("£"), None);
        assert_eq!(parse_price("£abc"), None);
        assert_eq!(parse_price("-3.00"), None);
        assert_eq!(parse_price("£-3.00"), None);
    }
}
