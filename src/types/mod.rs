//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and owner types
//! - `operation`: Withdraw/transfer request types
//! - `error`: Error types for the engine

pub mod account;
pub mod error;
pub mod operation;

pub use account::{Account, AccountId, User, UserId};
pub use error::MoneyError;
pub use operation::{OperationKind, OperationRecord};
