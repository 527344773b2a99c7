//! Derived reports over account state
//!
//! Reports are structured data computed on demand; rendering them as
//! text is the display module's job.

pub mod overview;

pub use overview::{BudgetLine, OverviewReport};
