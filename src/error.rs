//! Custom error types for cashbook
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. No library operation panics or
//! terminates the process; every failure surfaces as one of these kinds.

use thiserror::Error;

/// The main error type for cashbook operations
#[derive(Error, Debug)]
pub enum CashbookError {
    /// Ledger storage could not grow (memory exhaustion). Fatal to the
    /// single operation, not to the process.
    #[error("Allocation failed: {0}")]
    Allocation(String),

    /// Entity not found errors (invalid-id lookups)
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Money arithmetic left the representable range. The operation is
    /// aborted with prior state unchanged.
    #[error("Amount overflow: {0}")]
    Overflow(String),

    /// Credential hashing/verification errors
    #[error("Credential error: {0}")]
    Crypto(String),
}

impl CashbookError {
    /// Create a "not found" error for budget entries
    pub fn budget_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an overflow error
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}

/// Result type alias for cashbook operations
pub type CashbookResult<T> = Result<T, CashbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CashbookError::Overflow("totaling incomes".into());
        assert_eq!(err.to_string(), "Amount overflow: totaling incomes");
    }

    #[test]
    fn test_budget_not_found() {
        let err = CashbookError::budget_not_found("bud-7");
        assert_eq!(err.to_string(), "Budget not found: bud-7");
        assert!(err.is_not_found());
        assert!(!err.is_overflow());
    }
}
