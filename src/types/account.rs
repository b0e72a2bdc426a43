//! Account-related types for the Moneybox engine
//!
//! This module defines the Account structure, its owner, and the identifiers
//! used to look them up.

use rust_decimal::Decimal;
use uuid::Uuid;

/// Account identifier
pub type AccountId = Uuid;

/// User identifier
pub type UserId = Uuid;

/// Account owner
///
/// Read-only from the engine's point of view. The email is the destination
/// for every notification raised on the owner's accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: &str, email: &str) -> Self {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Bank account state
///
/// Loaded fresh for every operation, mutated in place by the debit or credit
/// service, then persisted. The pay-in limit is not stored here; it is a
/// deployment-wide value in [`crate::config::LimitsConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Stable unique identifier
    pub id: AccountId,

    /// Owner of the account
    pub user: User,

    /// Current withdrawable amount
    ///
    /// Signed: the engine refuses debits that would take it below zero, but
    /// the type itself does not forbid negative balances.
    pub balance: Decimal,

    /// Cumulative amount debited
    ///
    /// Each debit subtracts its amount, so this counter moves downwards.
    pub withdrawn: Decimal,

    /// Cumulative amount credited since the pay-in period started
    pub paid_in: Decimal,

    /// Optimistic concurrency token
    ///
    /// Bumped by the repository on every successful update. A write carrying
    /// a stale version is rejected.
    pub version: u64,
}

impl Account {
    /// Create a new account with zero balances at version 0
    pub fn new(id: AccountId, user: User) -> Self {
        Account {
            id,
            user,
            balance: Decimal::ZERO,
            withdrawn: Decimal::ZERO,
            paid_in: Decimal::ZERO,
            version: 0,
        }
    }

    /// Set the opening balance
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    /// Set the opening paid-in total
    pub fn with_paid_in(mut self, paid_in: Decimal) -> Self {
        self.paid_in = paid_in;
        self
    }

    /// Set the opening withdrawn total
    pub fn with_withdrawn(mut self, withdrawn: Decimal) -> Self {
        self.withdrawn = withdrawn;
        self
    }
}
