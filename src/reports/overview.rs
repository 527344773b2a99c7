//! Account overview report
//!
//! A derived, read-only summary of an account's ledgers: totals, net
//! cash flow, and per-budget utilization. Recomputed on demand from the
//! account; nothing here is stored state.

use serde::Serialize;

use crate::error::CashbookResult;
use crate::models::{Account, BudgetId, Money};

/// A row in the overview for a single budget, in insertion order
#[derive(Debug, Clone, Serialize)]
pub struct BudgetLine {
    pub id: BudgetId,
    pub name: String,
    pub spent: Money,
    pub limit: Money,
}

impl BudgetLine {
    /// Amount left before the limit; negative once overspent
    pub fn remaining(&self) -> CashbookResult<Money> {
        self.limit.checked_sub(self.spent)
    }

    /// Check if spending has passed the limit
    pub fn is_overspent(&self) -> bool {
        self.spent > self.limit
    }
}

/// Structured overview of an account's ledgers
///
/// Totals are `None` when the corresponding ledger has no entries, so a
/// consumer can distinguish "nothing recorded" from a zero total. Net
/// flow is only computed when both sides are present; partial data is
/// never presented as a complete net figure.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    /// Sum of recorded incomes, absent when none are recorded
    pub total_income: Option<Money>,
    /// Sum of recorded expenses, absent when none are recorded
    pub total_expense: Option<Money>,
    /// Income minus expense, present only when both totals are
    pub net_flow: Option<Money>,
    /// True when net flow is present and income does not exceed expense
    pub low_solvency_warning: bool,
    /// One line per budget, in insertion order
    pub budgets: Vec<BudgetLine>,
}

impl OverviewReport {
    /// Compute the overview for an account's current state
    pub fn generate(account: &Account) -> CashbookResult<Self> {
        let total_income = if account.incomes().is_empty() {
            None
        } else {
            Some(account.total_income()?)
        };

        let total_expense = if account.expenses().is_empty() {
            None
        } else {
            Some(account.total_expense()?)
        };

        let net_flow = match (total_income, total_expense) {
            (Some(income), Some(expense)) => Some(income.checked_sub(expense)?),
            _ => None,
        };

        let low_solvency_warning = match (total_income, total_expense) {
            (Some(income), Some(expense)) => income <= expense,
            _ => false,
        };

        let budgets = account
            .budgets()
            .iter()
            .map(|budget| BudgetLine {
                id: budget.id,
                name: budget.name.clone(),
                spent: budget.spent,
                limit: budget.limit,
            })
            .collect();

        Ok(Self {
            total_income,
            total_expense,
            net_flow,
            low_solvency_warning,
            budgets,
        })
    }

    /// Check if any budget line is overspent
    pub fn has_overspent_budget(&self) -> bool {
        self.budgets.iter().any(|line| line.is_overspent())
    }
}
