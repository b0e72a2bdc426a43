//! Withdraw operation
//!
//! Single-account debit with validation up front. Nothing is written unless
//! every check passes.

use crate::core::traits::DebitAccount;
use crate::types::{AccountId, MoneyError};
use rust_decimal::Decimal;

/// Withdraw money from one account
#[derive(Debug, Clone)]
pub struct WithdrawMoney<D> {
    debit_account: D,
}

impl<D: DebitAccount> WithdrawMoney<D> {
    pub fn new(debit_account: D) -> Self {
        Self { debit_account }
    }

    /// Withdraw `amount` from `from_account_id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative (nothing is loaded)
    /// - The account cannot be loaded
    /// - The balance would go below zero (nothing is written)
    /// - The debit itself fails to persist or notify
    pub fn execute(&self, from_account_id: AccountId, amount: Decimal) -> Result<(), MoneyError> {
        if amount <= Decimal::ZERO {
            return Err(MoneyError::invalid_amount(amount));
        }

        let mut account = self.debit_account.load_account(from_account_id)?;

        if !self.debit_account.has_sufficient_balance(&account, amount) {
            return Err(MoneyError::insufficient_funds(
                account.id,
                account.balance,
                amount,
            ));
        }

        self.debit_account.debit(&mut account, amount)?;
        tracing::info!(account = %from_account_id, %amount, "Withdrawal completed");

        Ok(())
    }
}
