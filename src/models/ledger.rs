//! Append-ordered, ID-indexed ledger collection
//!
//! A ledger holds every entry of one kind recorded against an account.
//! Entries are only ever appended; insertion order is preserved and IDs
//! are minted sequentially from zero, so an entry's position and its ID
//! stay in lockstep for the account's whole lifetime.

use serde::{Deserialize, Serialize};

use super::entry::LedgerEntry;
use super::ids::SequentialId;
use super::money::Money;
use crate::error::{CashbookError, CashbookResult};

/// An append-only collection of ledger entries of one kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger<T> {
    entries: Vec<T>,
    next_id: u64,
}

impl<T: LedgerEntry> Ledger<T> {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Append an entry built from the next sequential ID
    ///
    /// IDs start at 0 and increase by one per append; they are never
    /// reused. Storage growth failure is the only failure mode and
    /// surfaces as [`CashbookError::Allocation`] with the ledger
    /// unchanged.
    pub fn append_with<F>(&mut self, make: F) -> CashbookResult<T::Id>
    where
        F: FnOnce(T::Id) -> T,
    {
        self.entries
            .try_reserve(1)
            .map_err(|e| CashbookError::Allocation(e.to_string()))?;

        let id = T::Id::from_raw(self.next_id);
        self.entries.push(make(id));
        self.next_id += 1;
        Ok(id)
    }

    /// Look up an entry by ID
    ///
    /// Linear scan; `None` for an absent ID, including on an empty
    /// ledger.
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Mutable lookup, reserved for the owning account's mutation paths
    pub(crate) fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// Exact sum of every entry's contribution, zero for an empty ledger
    pub fn total(&self) -> CashbookResult<Money> {
        self.entries
            .iter()
            .try_fold(Money::zero(), |acc, entry| acc.checked_add(entry.amount()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: LedgerEntry> Default for Ledger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: LedgerEntry> IntoIterator for &'a Ledger<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
