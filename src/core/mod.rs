//! Core business logic module
//!
//! This module contains the money-movement components:
//! - `traits` - Repository, notification, and debit/credit capability seams
//! - `debit_account` - Balance sufficiency checks and debits
//! - `credit_account` - Pay-in limit checks and credits
//! - `notification` - Which alert goes to whom
//! - `withdraw` / `transfer` - Operation orchestration
//! - `engine` - Routing of operation records and service wiring
//! - `account_repository` - In-memory repository with optimistic versioning

pub mod account_repository;
pub mod credit_account;
pub mod debit_account;
pub mod engine;
pub mod notification;
pub mod traits;
pub mod transfer;
pub mod withdraw;

#[cfg(test)]
pub(crate) mod testing;

pub use account_repository::InMemoryAccountRepository;
pub use credit_account::CreditService;
pub use debit_account::DebitService;
pub use engine::{MoneyEngine, RepositoryCredit, RepositoryDebit};
pub use notification::{LowFundsNotification, PayInLimitNotification, TracingNotificationService};
pub use traits::{
    AccountNotification, AccountRepository, CreditAccount, DebitAccount, NotificationService,
};
pub use transfer::TransferMoney;
pub use withdraw::WithdrawMoney;
