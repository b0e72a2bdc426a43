//! In-memory account repository
//!
//! This module provides `InMemoryAccountRepository`, a thread-safe
//! implementation of `AccountRepository` backed by `DashMap`.
//!
//! # Optimistic Concurrency
//!
//! Every stored account carries a version. A write is accepted only if the
//! version on the incoming account matches the stored one, and the stored
//! version is bumped on success. Two operations that load the same account
//! and both try to write it cannot silently overwrite each other: the
//! second writer gets `VersionConflict` and must reload.

use crate::core::traits::AccountRepository;
use crate::types::{Account, AccountId, MoneyError};
use dashmap::DashMap;

/// Thread-safe in-memory account store
///
/// Operations on different accounts do not block each other; the
/// compare-and-bump of a single account's version happens under that
/// entry's lock.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<AccountId, Account>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Seed or replace an account
    ///
    /// Bypasses the version check; intended for loading initial state.
    pub fn insert(&self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    /// Snapshot of every stored account, sorted by identifier
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn get_account_by_id(&self, account_id: AccountId) -> Result<Account, MoneyError> {
        self.accounts
            .get(&account_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| MoneyError::account_not_found(account_id))
    }

    fn update(&self, account: &mut Account) -> Result<(), MoneyError> {
        let mut stored = self
            .accounts
            .get_mut(&account.id)
            .ok_or_else(|| MoneyError::account_not_found(account.id))?;

        if stored.version != account.version {
            return Err(MoneyError::version_conflict(
                account.id,
                account.version,
                stored.version,
            ));
        }

        account.version += 1;
        *stored.value_mut() = account.clone();
        Ok(())
    }
}
