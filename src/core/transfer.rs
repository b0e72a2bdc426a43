//! Transfer operation
//!
//! Moves funds between two accounts. Both accounts are loaded and both
//! checks are evaluated before either account is touched.
//!
//! # Consistency
//!
//! The debit and the credit are two separate repository writes with no
//! transaction spanning them. If the credit fails after the debit has been
//! persisted, the source stays debited and the error is returned as-is; no
//! compensating credit is attempted.

use crate::core::traits::{CreditAccount, DebitAccount};
use crate::types::{AccountId, MoneyError};
use rust_decimal::Decimal;

/// Transfer money between two accounts
#[derive(Debug, Clone)]
pub struct TransferMoney<D, C> {
    debit_account: D,
    credit_account: C,
}

impl<D, C> TransferMoney<D, C>
where
    D: DebitAccount,
    C: CreditAccount,
{
    pub fn new(debit_account: D, credit_account: C) -> Self {
        Self {
            debit_account,
            credit_account,
        }
    }

    /// Transfer `amount` from `from_account_id` to `to_account_id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Both identifiers name the same account
    /// - Either account cannot be loaded
    /// - The source balance would go below zero
    /// - The destination would exceed its pay-in limit
    /// - The debit or the credit fails to persist or notify
    pub fn execute(
        &self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), MoneyError> {
        if amount <= Decimal::ZERO {
            return Err(MoneyError::invalid_amount(amount));
        }

        if from_account_id == to_account_id {
            return Err(MoneyError::same_account_transfer(from_account_id));
        }

        let mut from = self.debit_account.load_account(from_account_id)?;
        let mut to = self.credit_account.load_account(to_account_id)?;

        if !self.debit_account.has_sufficient_balance(&from, amount) {
            return Err(MoneyError::insufficient_funds(from.id, from.balance, amount));
        }

        if self.credit_account.is_pay_in_limit_reached(&to, amount) {
            return Err(MoneyError::pay_in_limit_reached(to.id, to.paid_in, amount));
        }

        self.debit_account.debit(&mut from, amount)?;

        if let Err(error) = self.credit_account.credit(&mut to, amount) {
            tracing::error!(
                from = %from_account_id,
                to = %to_account_id,
                %amount,
                %error,
                "Transfer credit failed after source was debited"
            );
            return Err(error);
        }

        tracing::info!(from = %from_account_id, to = %to_account_id, %amount, "Transfer completed");

        Ok(())
    }
}
