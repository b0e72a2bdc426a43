//! Error types for the Moneybox engine
//!
//! This module defines every error an operation can surface to its caller.
//!
//! # Error Categories
//!
//! - **Argument Errors**: Non-positive amounts, transfers onto the same account
//! - **Domain Errors**: Insufficient funds, pay-in limit reached
//! - **Collaborator Errors**: Repository and notification failures, passed through untouched
//! - **Arithmetic Errors**: Overflow in balance calculations

use super::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the Moneybox engine
///
/// Domain variants are always raised before any account is mutated, so a
/// failed withdraw or transfer can be retried once the condition is fixed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// Amount is zero or negative
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Source and destination of a transfer are the same account
    #[error("Cannot transfer from account {account} to itself")]
    SameAccountTransfer {
        /// The account named on both sides
        account: AccountId,
    },

    /// Transfer was requested without a destination account
    #[error("Transfer requires a destination account")]
    MissingDestination,

    /// Debit would leave the balance below zero
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account being debited
        account: AccountId,
        /// Balance before the debit
        balance: Decimal,
        /// Requested debit amount
        requested: Decimal,
    },

    /// Credit would take the paid-in total past the pay-in limit
    #[error("Pay-in limit reached for account {account}: paid in {paid_in}, requested {requested}")]
    PayInLimitReached {
        /// Account being credited
        account: AccountId,
        /// Paid-in total before the credit
        paid_in: Decimal,
        /// Requested credit amount
        requested: Decimal,
    },

    /// Repository has no account with this identifier
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The identifier that was looked up
        account: AccountId,
    },

    /// Stored account changed since it was loaded
    #[error("Account {account} was modified concurrently: expected version {expected}, found {found}")]
    VersionConflict {
        /// Account being written
        account: AccountId,
        /// Version the writer loaded
        expected: u64,
        /// Version currently stored
        found: u64,
    },

    /// Repository failed for a reason of its own
    #[error("Storage error: {message}")]
    Storage {
        /// Description reported by the repository
        message: String,
    },

    /// Notification sink failed to deliver
    #[error("Notification error: {message}")]
    Notification {
        /// Description reported by the sink
        message: String,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account being updated
        account: AccountId,
    },
}

impl MoneyError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        MoneyError::InvalidAmount { amount }
    }

    /// Create a SameAccountTransfer error
    pub fn same_account_transfer(account: AccountId) -> Self {
        MoneyError::SameAccountTransfer { account }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountId, balance: Decimal, requested: Decimal) -> Self {
        MoneyError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a PayInLimitReached error
    pub fn pay_in_limit_reached(account: AccountId, paid_in: Decimal, requested: Decimal) -> Self {
        MoneyError::PayInLimitReached {
            account,
            paid_in,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        MoneyError::AccountNotFound { account }
    }

    /// Create a VersionConflict error
    pub fn version_conflict(account: AccountId, expected: u64, found: u64) -> Self {
        MoneyError::VersionConflict {
            account,
            expected,
            found,
        }
    }

    /// Create a Storage error
    pub fn storage(message: &str) -> Self {
        MoneyError::Storage {
            message: message.to_string(),
        }
    }

    /// Create a Notification error
    pub fn notification(message: &str) -> Self {
        MoneyError::Notification {
            message: message.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        MoneyError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Whether the error is one of the pre-mutation business rule checks
    ///
    /// Domain errors leave every account untouched; anything else may have
    /// been raised after a write.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            MoneyError::InvalidAmount { .. }
                | MoneyError::SameAccountTransfer { .. }
                | MoneyError::MissingDestination
                | MoneyError::InsufficientFunds { .. }
                | MoneyError::PayInLimitReached { .. }
        )
    }
}
