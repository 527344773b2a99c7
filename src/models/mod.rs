//! Core data models for cashbook
//!
//! This module contains the data structures that make up the ledger
//! domain: money amounts, typed entry IDs, the three entry kinds, the
//! generic append-only ledger, and the account that owns them.

pub mod account;
pub mod credential;
pub mod entry;
pub mod ids;
pub mod ledger;
pub mod money;

pub use account::Account;
pub use credential::CredentialRecord;
pub use entry::{Budget, Expense, Income, LedgerEntry};
pub use ids::{BudgetId, ExpenseId, IncomeId, SequentialId};
pub use ledger::Ledger;
pub use money::Money;
