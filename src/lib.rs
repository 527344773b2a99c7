//! cashbook - single-user personal finance record keeper
//!
//! This library tracks one user's finances as three append-only ledgers
//! (incomes, expenses, budgets) owned by a password-protected account,
//! and derives a structured overview of net cash flow and budget
//! utilization.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, ledgers, entries, the account)
//! - `crypto`: Argon2id credential hashing (collaborator; the core only
//!   stores its output)
//! - `reports`: Derived overview computation
//! - `display`: Terminal rendering of reports
//!
//! # Example
//!
//! ```rust
//! use cashbook::models::{Account, CredentialRecord, Money};
//! use cashbook::reports::OverviewReport;
//!
//! let credential = CredentialRecord::new("$argon2id$...", "salt");
//! let mut account = Account::open("Casey", credential);
//! account.add_income("Paycheck", Money::from_cents(190_00))?;
//! let report = OverviewReport::generate(&account)?;
//! assert_eq!(report.total_income, Some(Money::from_cents(190_00)));
//! # Ok::<(), cashbook::CashbookError>(())
//! ```

pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;

pub use error::{CashbookError, CashbookResult};
