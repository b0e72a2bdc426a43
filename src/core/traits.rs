//! Core traits for account access, notifications, and the debit/credit seams
//!
//! The repository and notification sink are collaborators the engine only
//! reaches through these traits. The debit and credit capabilities are kept
//! as two separate narrow traits so each operation depends on exactly the
//! side it uses.

use crate::types::{Account, AccountId, MoneyError};
use rust_decimal::Decimal;

/// Account persistence boundary
pub trait AccountRepository {
    /// Load an account by identifier
    fn get_account_by_id(&self, account_id: AccountId) -> Result<Account, MoneyError>;

    /// Persist an updated account
    ///
    /// On success the repository stamps the new version onto `account`.
    fn update(&self, account: &mut Account) -> Result<(), MoneyError>;
}

/// Outbound notification delivery
///
/// The channel (email, SMS, voice) is the implementation's business.
pub trait NotificationService {
    fn notify_approaching_pay_in_limit(&self, email_address: &str) -> Result<(), MoneyError>;

    fn notify_funds_low(&self, email_address: &str) -> Result<(), MoneyError>;
}

/// A notification raised about a specific account
pub trait AccountNotification {
    fn notify(&self, account: &Account) -> Result<(), MoneyError>;
}

/// Debit-side account capability
///
/// The loaded account is handed back to the caller and passed into every
/// later call, so a service instance carries no per-operation state.
pub trait DebitAccount {
    /// Load the account to be debited
    fn load_account(&self, account_id: AccountId) -> Result<Account, MoneyError>;

    /// Whether `balance - amount` stays at or above zero
    fn has_sufficient_balance(&self, account: &Account, amount: Decimal) -> bool;

    /// Apply a debit, persist it, and raise the low-funds notification if needed
    ///
    /// Performs no sufficiency check; callers validate first.
    fn debit(&self, account: &mut Account, amount: Decimal) -> Result<(), MoneyError>;
}

/// Credit-side account capability
pub trait CreditAccount {
    /// Load the account to be credited
    fn load_account(&self, account_id: AccountId) -> Result<Account, MoneyError>;

    /// Whether `paid_in + amount` would exceed the pay-in limit
    fn is_pay_in_limit_reached(&self, account: &Account, amount: Decimal) -> bool;

    /// Apply a credit, persist it, and raise the pay-in notification if needed
    ///
    /// Performs no limit check; callers validate first.
    fn credit(&self, account: &mut Account, amount: Decimal) -> Result<(), MoneyError>;
}

impl<T: AccountRepository + ?Sized> AccountRepository for std::sync::Arc<T> {
    fn get_account_by_id(&self, account_id: AccountId) -> Result<Account, MoneyError> {
        (**self).get_account_by_id(account_id)
    }

    fn update(&self, account: &mut Account) -> Result<(), MoneyError> {
        (**self).update(account)
    }
}

impl<T: NotificationService + ?Sized> NotificationService for std::sync::Arc<T> {
    fn notify_approaching_pay_in_limit(&self, email_address: &str) -> Result<(), MoneyError> {
        (**self).notify_approaching_pay_in_limit(email_address)
    }

    fn notify_funds_low(&self, email_address: &str) -> Result<(), MoneyError> {
        (**self).notify_funds_low(email_address)
    }
}
