//! Credit service
//!
//! This module provides `CreditService`, the repository-backed implementation
//! of the `CreditAccount` capability.

use crate::config::LimitsConfig;
use crate::core::traits::{AccountNotification, AccountRepository, CreditAccount};
use crate::types::{Account, AccountId, MoneyError};
use rust_decimal::Decimal;

/// Repository-backed credit capability
#[derive(Debug, Clone)]
pub struct CreditService<R, N> {
    repository: R,
    pay_in_limit: N,
    limits: LimitsConfig,
}

impl<R, N> CreditService<R, N>
where
    R: AccountRepository,
    N: AccountNotification,
{
    pub fn new(repository: R, pay_in_limit: N, limits: LimitsConfig) -> Self {
        Self {
            repository,
            pay_in_limit,
            limits,
        }
    }
}

impl<R, N> CreditAccount for CreditService<R, N>
where
    R: AccountRepository,
    N: AccountNotification,
{
    fn load_account(&self, account_id: AccountId) -> Result<Account, MoneyError> {
        self.repository.get_account_by_id(account_id)
    }

    fn is_pay_in_limit_reached(&self, account: &Account, amount: Decimal) -> bool {
        account
            .paid_in
            .checked_add(amount)
            .is_none_or(|paid_in| paid_in > self.limits.pay_in_limit)
    }

    /// Credit the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Adding the amount to balance or paid-in would overflow
    /// - The remaining pay-in headroom cannot be represented
    /// - The repository rejects the write
    /// - The notification sink fails (the credit is already persisted by then)
    fn credit(&self, account: &mut Account, amount: Decimal) -> Result<(), MoneyError> {
        let new_balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| MoneyError::arithmetic_overflow("credit", account.id))?;

        let new_paid_in = account
            .paid_in
            .checked_add(amount)
            .ok_or_else(|| MoneyError::arithmetic_overflow("credit", account.id))?;

        let headroom = self
            .limits
            .pay_in_limit
            .checked_sub(new_paid_in)
            .ok_or_else(|| MoneyError::arithmetic_overflow("credit", account.id))?;

        account.balance = new_balance;
        account.paid_in = new_paid_in;

        self.repository.update(account)?;
        tracing::debug!(account = %account.id, %amount, paid_in = %account.paid_in, "Account credited");

        if headroom < self.limits.pay_in_warning_margin {
            self.pay_in_limit.notify(account)?;
        }

        Ok(())
    }
}
