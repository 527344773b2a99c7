//! Strongly-typed ID wrappers for ledger entries
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from
//! different ledger kinds at compile time. Unlike random identifiers,
//! ledger IDs are sequential: each ledger mints 0, 1, 2, ... in append
//! order and never reuses a value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minting interface used by the generic ledger to issue sequential IDs
pub trait SequentialId: Copy + Eq {
    /// Wrap a raw sequence number
    fn from_raw(raw: u64) -> Self;

    /// Get the raw sequence number
    fn raw(&self) -> u64;
}

/// Error returned when an ID string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError(String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid id: {}", self.0)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl SequentialId for $name {
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept both the prefixed display form and bare digits
                let digits = s.strip_prefix($display_prefix).unwrap_or(s);
                digits
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| ParseIdError(s.to_string()))
            }
        }
    };
}

define_id!(IncomeId, "inc-");
define_id!(ExpenseId, "exp-");
define_id!(BudgetId, "bud-");
