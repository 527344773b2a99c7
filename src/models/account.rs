//! Account model
//!
//! An account owns one credential record and one ledger of each kind.
//! Ownership is strictly tree-shaped (account → ledger → entry); entries
//! are never shared and drop with the account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::credential::CredentialRecord;
use super::entry::{Budget, Expense, Income};
use super::ids::{BudgetId, ExpenseId, IncomeId};
use super::ledger::Ledger;
use super::money::Money;
use crate::error::{CashbookError, CashbookResult};

/// A single user's account: credential plus income/expense/budget ledgers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    name: String,
    credential: CredentialRecord,
    incomes: Ledger<Income>,
    expenses: Ledger<Expense>,
    budgets: Ledger<Budget>,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Open an account with a precomputed credential and empty ledgers
    pub fn open(name: impl Into<String>, credential: CredentialRecord) -> Self {
        Self {
            name: name.into(),
            credential,
            incomes: Ledger::new(),
            expenses: Ledger::new(),
            budgets: Ledger::new(),
            opened_at: Utc::now(),
        }
    }

    /// The account holder's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored credential, opaque to the ledger core
    pub fn credential(&self) -> &CredentialRecord {
        &self.credential
    }

    /// When the account was opened
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// The income ledger, in insertion order
    pub fn incomes(&self) -> &Ledger<Income> {
        &self.incomes
    }

    /// The expense ledger, in insertion order
    pub fn expenses(&self) -> &Ledger<Expense> {
        &self.expenses
    }

    /// The budget ledger, in insertion order
    pub fn budgets(&self) -> &Ledger<Budget> {
        &self.budgets
    }

    /// Record an income, returning its assigned ID
    pub fn add_income(
        &mut self,
        name: impl Into<String>,
        amount: Money,
    ) -> CashbookResult<IncomeId> {
        let name = name.into();
        self.incomes
            .append_with(|id| Income::new(id, name, amount))
    }

    /// Record an expense, returning its assigned ID
    pub fn add_expense(
        &mut self,
        name: impl Into<String>,
        amount: Money,
    ) -> CashbookResult<ExpenseId> {
        let name = name.into();
        self.expenses
            .append_with(|id| Expense::new(id, name, amount))
    }

    /// Create a budget with the given limit and nothing spent yet
    pub fn add_budget(
        &mut self,
        name: impl Into<String>,
        limit: Money,
    ) -> CashbookResult<BudgetId> {
        let name = name.into();
        self.budgets
            .append_with(|id| Budget::new(id, name, limit))
    }

    /// Add an amount to a budget's spent balance, returning the new
    /// balance
    ///
    /// An unknown ID fails with a not-found error and the ledgers are
    /// left untouched; overflow likewise leaves the balance unchanged.
    pub fn deposit_to_budget(&mut self, id: BudgetId, amount: Money) -> CashbookResult<Money> {
        let budget = self
            .budgets
            .get_mut(id)
            .ok_or_else(|| CashbookError::budget_not_found(id))?;
        budget.deposit(amount)
    }

    /// Clear a budget's spent balance to zero, returning the amount
    /// cleared
    ///
    /// An unknown ID fails with a not-found error and nothing changes.
    pub fn reset_budget(&mut self, id: BudgetId) -> CashbookResult<Money> {
        let budget = self
            .budgets
            .get_mut(id)
            .ok_or_else(|| CashbookError::budget_not_found(id))?;
        Ok(budget.reset())
    }

    /// Exact sum of all recorded incomes
    pub fn total_income(&self) -> CashbookResult<Money> {
        self.incomes.total()
    }

    /// Exact sum of all recorded expenses
    pub fn total_expense(&self) -> CashbookResult<Money> {
        self.expenses.total()
    }

    /// Exact sum of every budget's spent balance
    pub fn total_budget_spent(&self) -> CashbookResult<Money> {
        self.budgets.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::SequentialId;

    fn test_credential() -> CredentialRecord {
        CredentialRecord::new("$argon2id$v=19$test", "testsalt")
    }

    fn test_account() -> Account {
        Account::open("Test", test_credential())
    }

    #[test]
    fn test_open_starts_empty() {
        let account = test_account();
        assert_eq!(account.name(), "Test");
        assert_eq!(account.credential().salt, "testsalt");
        assert!(account.incomes().is_empty());
        assert!(account.expenses().is_empty());
        assert!(account.budgets().is_empty());
    }

    #[test]
    fn test_ids_assigned_per_ledger() {
        let mut account = test_account();

        let first = account
            .add_income("Paycheck", Money::from_cents(19000))
            .unwrap();
        let second = account
            .add_income("Paycheck", Money::from_cents(19000))
            .unwrap();
        let expense = account
            .add_expense("Utilities", Money::from_cents(10000))
            .unwrap();

        assert_eq!(first, IncomeId::from_raw(0));
        assert_eq!(second, IncomeId::from_raw(1));
        // Each ledger counts independently
        assert_eq!(expense, ExpenseId::from_raw(0));
    }

    #[test]
    fn test_totals() {
        let mut account = test_account();
        account.add_income("Paycheck", Money::from_cents(19000)).unwrap();
        account.add_income("Paycheck", Money::from_cents(19000)).unwrap();
        account.add_income("Side job", Money::from_cents(11000)).unwrap();
        account.add_expense("Utilities", Money::from_cents(10000)).unwrap();

        assert_eq!(account.total_income().unwrap(), Money::from_cents(49000));
        assert_eq!(account.total_expense().unwrap(), Money::from_cents(10000));
    }

    #[test]
    fn test_total_budget_spent() {
        let mut account = test_account();
        let groceries = account
            .add_budget("Groceries", Money::from_cents(80000))
            .unwrap();
        let rent = account.add_budget("Rent", Money::from_cents(90000)).unwrap();
        account.deposit_to_budget(groceries, Money::from_cents(500)).unwrap();
        account.deposit_to_budget(rent, Money::from_cents(700)).unwrap();

        // Sums spent balances, not limits
        assert_eq!(
            account.total_budget_spent().unwrap(),
            Money::from_cents(1200)
        );
    }

    #[test]
    fn test_deposit_to_budget() {
        let mut account = test_account();
        let id = account
            .add_budget("Groceries", Money::from_cents(80000))
            .unwrap();

        let spent = account
            .deposit_to_budget(id, Money::from_cents(75121))
            .unwrap();
        assert_eq!(spent.cents(), 75121);
        assert_eq!(account.budgets().get(id).unwrap().spent.cents(), 75121);
    }

    #[test]
    fn test_deposit_invalid_id_is_noop() {
        let mut account = test_account();
        account
            .add_budget("Groceries", Money::from_cents(80000))
            .unwrap();

        let err = account
            .deposit_to_budget(BudgetId::from_raw(5), Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(account.budgets().total().unwrap(), Money::zero());
    }

    #[test]
    fn test_deposit_on_empty_budget_ledger() {
        let mut account = test_account();
        let err = account
            .deposit_to_budget(BudgetId::from_raw(0), Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reset_budget() {
        let mut account = test_account();
        let id = account
            .add_budget("Groceries", Money::from_cents(80000))
            .unwrap();
        account.deposit_to_budget(id, Money::from_cents(75121)).unwrap();

        let cleared = account.reset_budget(id).unwrap();
        assert_eq!(cleared.cents(), 75121);
        assert_eq!(account.budgets().get(id).unwrap().spent, Money::zero());
    }

    #[test]
    fn test_reset_invalid_id() {
        let mut account = test_account();
        let err = account.reset_budget(BudgetId::from_raw(3)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_deposit_overflow_keeps_prior_state() {
        let mut account = test_account();
        let id = account.add_budget("Big", Money::from_cents(100)).unwrap();
        account
            .deposit_to_budget(id, Money::from_cents(i64::MAX))
            .unwrap();

        let err = account
            .deposit_to_budget(id, Money::from_cents(1))
            .unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(account.budgets().get(id).unwrap().spent.cents(), i64::MAX);
    }
}
