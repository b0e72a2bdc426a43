//! Moneybox Engine Library
//! # Overview
//!
//! This library moves money between Moneybox accounts: withdrawals out of an
//! account and transfers from one account into another, with the owner
//! notified when funds run low or cumulative pay-ins approach the limit.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, User, OperationRecord, MoneyError)
//! - [`config`] - Monetary thresholds injected into the services
//! - [`core`] - Business logic components:
//!   - [`core::debit_account`] / [`core::credit_account`] - Account-level debit and credit
//!   - [`core::withdraw`] / [`core::transfer`] - Operation orchestration
//!   - [`core::engine`] - Routing and wiring
//!   - [`core::account_repository`] - In-memory storage with optimistic versioning
//! - [`io`] - CSV parsing and output
//! - [`processor`] - Batch runner driving the engine from CSV files
//! - [`cli`] - CLI arguments parsing
//!
//! # Rules
//!
//! - Amounts must be strictly positive
//! - A debit never takes a balance below zero
//! - A credit never takes cumulative pay-ins above the pay-in limit
//! - Every pre-condition is checked before any account is written

pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod processor;
pub mod types;

pub use config::LimitsConfig;
pub use core::{
    AccountRepository, InMemoryAccountRepository, MoneyEngine, NotificationService,
    TracingNotificationService,
};
pub use io::write_accounts_csv;
pub use processor::{OperationProcessor, ProcessingSummary};
pub use types::{Account, AccountId, MoneyError, OperationKind, OperationRecord, User, UserId};
