//! Ledger entry models
//!
//! One entry type per ledger kind. Incomes and expenses are immutable
//! once recorded; a budget's `spent` balance changes only through
//! explicit deposit and reset operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, ExpenseId, IncomeId, SequentialId};
use super::money::Money;
use crate::error::CashbookResult;

/// Common interface the generic ledger requires of its entries
pub trait LedgerEntry {
    /// The typed ID minted for this entry kind
    type Id: SequentialId + fmt::Display;

    /// The entry's assigned ID
    fn id(&self) -> Self::Id;

    /// The entry's contribution to the ledger total. For budgets this is
    /// the current `spent` balance, not the limit.
    fn amount(&self) -> Money;
}

/// A recorded income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub name: String,
    pub amount: Money,
}

impl Income {
    pub fn new(id: IncomeId, name: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
        }
    }
}

impl LedgerEntry for Income {
    type Id = IncomeId;

    fn id(&self) -> IncomeId {
        self.id
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.id, self.name, self.amount)
    }
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
}

impl Expense {
    pub fn new(id: ExpenseId, name: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
        }
    }
}

impl LedgerEntry for Expense {
    type Id = ExpenseId;

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.id, self.name, self.amount)
    }
}

/// A spending envelope with a limit and a running spent balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub name: String,
    /// Running balance; starts at zero and may exceed `limit`
    pub spent: Money,
    pub limit: Money,
}

impl Budget {
    /// Create a budget with `spent` initialized to zero
    pub fn new(id: BudgetId, name: impl Into<String>, limit: Money) -> Self {
        Self {
            id,
            name: name.into(),
            spent: Money::zero(),
            limit,
        }
    }

    /// Add an amount to the spent balance. Negative amounts are accepted
    /// as corrections. On overflow the balance is left unchanged.
    pub fn deposit(&mut self, amount: Money) -> CashbookResult<Money> {
        self.spent = self.spent.checked_add(amount)?;
        Ok(self.spent)
    }

    /// Clear the spent balance back to zero, returning the amount cleared
    pub fn reset(&mut self) -> Money {
        std::mem::take(&mut self.spent)
    }

    /// Check if spending has passed the limit
    pub fn is_overspent(&self) -> bool {
        self.spent > self.limit
    }
}

impl LedgerEntry for Budget {
    type Id = BudgetId;

    fn id(&self) -> BudgetId {
        self.id
    }

    fn amount(&self) -> Money {
        self.spent
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}/{}", self.id, self.name, self.spent, self.limit)
    }
}
