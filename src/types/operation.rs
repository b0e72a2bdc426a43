//! Operation-related types for the Moneybox engine
//!
//! This module defines the money-movement requests the engine accepts.

use super::account::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Operations supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Debit a single account
    ///
    /// Requires the balance to stay at or above zero afterwards.
    Withdraw,

    /// Move funds from one account to another
    ///
    /// Requires sufficient funds at the source and pay-in headroom at the
    /// destination. Both checks run before either account is touched.
    Transfer,
}

/// A single withdraw or transfer request
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub kind: OperationKind,

    /// Account debited
    pub from: AccountId,

    /// Account credited
    ///
    /// Required for transfers, ignored for withdrawals.
    pub to: Option<AccountId>,

    pub amount: Decimal,
}

impl OperationRecord {
    pub fn withdraw(from: AccountId, amount: Decimal) -> Self {
        OperationRecord {
            kind: OperationKind::Withdraw,
            from,
            to: None,
            amount,
        }
    }

    pub fn transfer(from: AccountId, to: AccountId, amount: Decimal) -> Self {
        OperationRecord {
            kind: OperationKind::Transfer,
            from,
            to: Some(to),
            amount,
        }
    }
}
