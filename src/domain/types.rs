//! Strongly-typed value objects used by the search domain.
//!
//! These wrappers enforce basic invariants (trimmed, non-empty text) so that
//! once a value reaches the domain layer it can be treated as trusted.
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Free-text search term, trimmed and guaranteed non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the term as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_is_trimmed() {
        let term = SearchTerm::new("  Acme Corp \t").expect("valid term");
        assert_eq!(term.as_str(), "Acme Corp");
    }

    #[test]
    fn blank_search_term_is_rejected() {
        assert_eq!(SearchTerm::new(""), Err(TypeConstraintError::EmptyString));
        assert_eq!(
            SearchTerm::new(" \n\t "),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
