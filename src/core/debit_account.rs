//! Debit service
//!
//! This module provides `DebitService`, the repository-backed implementation
//! of the `DebitAccount` capability.
//!
//! The service is responsible for:
//! - Loading the account to be debited
//! - Answering whether a debit would keep the balance at or above zero
//! - Applying the debit to balance and withdrawn counter, then persisting it
//! - Raising the low-funds notification when the new balance is under the threshold

use crate::config::LimitsConfig;
use crate::core::traits::{AccountNotification, AccountRepository, DebitAccount};
use crate::types::{Account, AccountId, MoneyError};
use rust_decimal::Decimal;

/// Repository-backed debit capability
///
/// Holds no per-operation state: the account being debited is owned by the
/// caller and passed in on every call.
#[derive(Debug, Clone)]
pub struct DebitService<R, N> {
    repository: R,
    low_funds: N,
    limits: LimitsConfig,
}

impl<R, N> DebitService<R, N>
where
    R: AccountRepository,
    N: AccountNotification,
{
    pub fn new(repository: R, low_funds: N, limits: LimitsConfig) -> Self {
        Self {
            repository,
            low_funds,
            limits,
        }
    }
}

impl<R, N> DebitAccount for DebitService<R, N>
where
    R: AccountRepository,
    N: AccountNotification,
{
    fn load_account(&self, account_id: AccountId) -> Result<Account, MoneyError> {
        self.repository.get_account_by_id(account_id)
    }

    fn has_sufficient_balance(&self, account: &Account, amount: Decimal) -> bool {
        account
            .balance
            .checked_sub(amount)
            .is_some_and(|remaining| remaining >= Decimal::ZERO)
    }

    /// Debit the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Subtracting the amount from balance or withdrawn would overflow
    /// - The repository rejects the write
    /// - The notification sink fails (the debit is already persisted by then)
    fn debit(&self, account: &mut Account, amount: Decimal) -> Result<(), MoneyError> {
        let new_balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| MoneyError::arithmetic_overflow("debit", account.id))?;

        let new_withdrawn = account
            .withdrawn
            .checked_sub(amount)
            .ok_or_else(|| MoneyError::arithmetic_overflow("debit", account.id))?;

        account.balance = new_balance;
        account.withdrawn = new_withdrawn;

        self.repository.update(account)?;
        tracing::debug!(account = %account.id, %amount, balance = %account.balance, "Account debited");

        if account.balance < self.limits.low_funds_threshold {
            self.low_funds.notify(account)?;
        }

        Ok(())
    }
}
