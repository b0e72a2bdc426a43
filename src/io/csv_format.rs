//! CSV format handling for accounts and operation records
//!
//! This module centralizes all CSV format concerns, providing:
//! - Raw record structures for deserialization
//! - Conversion from raw records to domain types
//! - Account output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Account, AccountId, OperationKind, OperationRecord, User};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;
use uuid::Uuid;

/// A raw CSV row that converts into a domain value
pub trait CsvRow: DeserializeOwned {
    type Output;

    fn convert(self) -> Result<Self::Output, String>;
}

/// Account row: `account,user,name,email,balance,withdrawn,paid_in`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountCsvRecord {
    pub account: String,
    pub user: String,
    pub name: String,
    pub email: String,
    pub balance: String,
    pub withdrawn: Option<String>,
    pub paid_in: Option<String>,
}

/// Operation row: `type,from,to,amount`
///
/// `to` is left empty for withdrawals.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OperationCsvRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub from: String,
    pub to: Option<String>,
    pub amount: String,
}

impl CsvRow for AccountCsvRecord {
    type Output = Account;

    fn convert(self) -> Result<Account, String> {
        convert_account_record(self)
    }
}

impl CsvRow for OperationCsvRecord {
    type Output = OperationRecord;

    fn convert(self) -> Result<OperationRecord, String> {
        convert_operation_record(self)
    }
}

fn parse_id(field: &str, value: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("Invalid {} id '{}'", field, value))
}

fn parse_amount(field: &str, value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|_| format!("Invalid {} '{}'", field, value))
}

/// Parse an optional decimal column, treating blank as zero
fn parse_optional_amount(field: &str, value: Option<&str>) -> Result<Decimal, String> {
    match value {
        Some(value) if !value.trim().is_empty() => parse_amount(field, value),
        _ => Ok(Decimal::ZERO),
    }
}

/// Convert an AccountCsvRecord to an Account at version 0
///
/// A negative `withdrawn` is accepted since every debit decreases it.
/// A negative `paid_in` is rejected.
pub fn convert_account_record(record: AccountCsvRecord) -> Result<Account, String> {
    let id = parse_id("account", &record.account)?;
    let user = User {
        id: parse_id("user", &record.user)?,
        name: record.name,
        email: record.email,
    };

    if user.email.trim().is_empty() {
        return Err(format!("Account {} has no owner email", id));
    }

    // paid_in only ever accumulates positive credits
    let paid_in = parse_optional_amount("paid_in", record.paid_in.as_deref())?;
    if paid_in < Decimal::ZERO {
        return Err(format!("Account {} has negative paid_in {}", id, paid_in));
    }

    Ok(Account {
        id,
        user,
        balance: parse_amount("balance", &record.balance)?,
        withdrawn: parse_optional_amount("withdrawn", record.withdrawn.as_deref())?,
        paid_in,
        version: 0,
    })
}

/// Convert an OperationCsvRecord to an OperationRecord
///
/// Validates the operation type and that transfers name a destination.
/// Amount sign is left to the engine, which owns that rule.
pub fn convert_operation_record(record: OperationCsvRecord) -> Result<OperationRecord, String> {
    let kind = match record.kind.to_lowercase().as_str() {
        "withdraw" => OperationKind::Withdraw,
        "transfer" => OperationKind::Transfer,
        _ => return Err(format!("Invalid operation type: '{}'", record.kind)),
    };

    let from: AccountId = parse_id("from", &record.from)?;
    let to = match record.to.as_deref() {
        Some(to) if !to.trim().is_empty() => Some(parse_id("to", to)?),
        _ => None,
    };

    if kind == OperationKind::Transfer && to.is_none() {
        return Err(format!("Transfer from {} requires a destination", from));
    }

    Ok(OperationRecord {
        kind,
        from,
        to: if kind == OperationKind::Transfer { to } else { None },
        amount: parse_amount("amount", &record.amount)?,
    })
}

/// Write account states to CSV format
///
/// Writes accounts with columns: account, balance, withdrawn, paid_in.
/// Accounts are sorted by id for deterministic output.
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["account", "balance", "withdrawn", "paid_in"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.id);

    for account in sorted_accounts {
        writer
            .write_record(&[
                account.id.to_string(),
                format!("{:.4}", account.balance),
                format!("{:.4}", account.withdrawn),
                format!("{:.4}", account.paid_in),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
