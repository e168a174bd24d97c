//! Search request values: the normalized query and the name filter derived
//! from it.

use crate::domain::types::{SearchTerm, TypeConstraintError};

/// Page used when the caller omits the page number or sends garbage.
pub const DEFAULT_PAGE: u64 = 1;

/// Validated search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: SearchTerm,
    /// One-based page number, never below 1.
    pub page: u64,
}

impl SearchQuery {
    /// Builds a query from raw request parameters.
    ///
    /// A missing or blank term is rejected. The page is read leniently: an
    /// absent or non-numeric value falls back to [`DEFAULT_PAGE`] and values
    /// below 1 are raised to 1. No upper bound is applied; pages past the end
    /// of the result set simply come back empty.
    pub fn normalize(
        raw_term: Option<&str>,
        raw_page: Option<&str>,
    ) -> Result<Self, TypeConstraintError> {
        let term = SearchTerm::new(raw_term.unwrap_or_default())?;
        let page = raw_page.map_or(DEFAULT_PAGE, parse_page);
        Ok(Self { term, page })
    }
}

/// Reads the leading integer of `raw`, the way loosely typed query strings
/// are usually interpreted: `"2.5"` is 2, `"3abc"` is 3, `"abc"` is the
/// default page. Zero and negative numbers become 1; numbers beyond `u64`
/// saturate.
fn parse_page(raw: &str) -> u64 {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits_len = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return DEFAULT_PAGE;
    }
    if negative {
        return 1;
    }

    digits[..digits_len]
        .bytes()
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
        .max(1)
}

/// Case-insensitive substring predicate on the entity name.
///
/// The pattern is `%term%`. Wildcard characters typed by the user (`%`, `_`)
/// are passed through unescaped and keep their wildcard meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFilter {
    pattern: String,
}

impl SearchFilter {
    pub fn from_term(term: &SearchTerm) -> Self {
        Self {
            pattern: format!("%{}%", term.as_str()),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl From<&SearchQuery> for SearchFilter {
    fn from(query: &SearchQuery) -> Self {
        Self::from_term(&query.term)
    }
}
