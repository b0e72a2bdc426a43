//! Notification policy
//!
//! Turns an account into a call on the notification sink: picks the owner's
//! contact address and the kind of alert. When to notify is decided by the
//! debit and credit services; this module only decides whom and what.

use crate::core::traits::{AccountNotification, NotificationService};
use crate::types::{Account, MoneyError};

/// Alert sent when a debit leaves the balance below the low-funds threshold
#[derive(Debug, Clone)]
pub struct LowFundsNotification<S> {
    sink: S,
}

impl<S: NotificationService> LowFundsNotification<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: NotificationService> AccountNotification for LowFundsNotification<S> {
    fn notify(&self, account: &Account) -> Result<(), MoneyError> {
        self.sink.notify_funds_low(&account.user.email)
    }
}

/// Alert sent when a credit leaves little headroom under the pay-in limit
#[derive(Debug, Clone)]
pub struct PayInLimitNotification<S> {
    sink: S,
}

impl<S: NotificationService> PayInLimitNotification<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: NotificationService> AccountNotification for PayInLimitNotification<S> {
    fn notify(&self, account: &Account) -> Result<(), MoneyError> {
        self.sink.notify_approaching_pay_in_limit(&account.user.email)
    }
}

/// Notification sink that emits structured log events
///
/// Stands in for a real delivery channel. Events go to the
/// `notifications` target so they can be filtered separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationService;

impl NotificationService for TracingNotificationService {
    fn notify_approaching_pay_in_limit(&self, email_address: &str) -> Result<(), MoneyError> {
        tracing::info!(
            target: "notifications",
            kind = "approaching_pay_in_limit",
            email = email_address,
            "Account is approaching its pay-in limit"
        );
        Ok(())
    }

    fn notify_funds_low(&self, email_address: &str) -> Result<(), MoneyError> {
        tracing::info!(
            target: "notifications",
            kind = "funds_low",
            email = email_address,
            "Account funds are low"
        );
        Ok(())
    }
}
