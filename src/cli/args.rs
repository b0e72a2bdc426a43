use crate::config::LimitsConfig;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Apply Moneybox withdrawals and transfers to a set of accounts
#[derive(Parser, Debug)]
#[command(name = "moneybox")]
#[command(about = "Apply Moneybox withdrawals and transfers to a set of accounts", long_about = None)]
pub struct CliArgs {
    /// Accounts CSV file path
    #[arg(value_name = "ACCOUNTS", help = "Path to the accounts CSV file")]
    pub accounts_file: PathBuf,

    /// Operations CSV file path
    #[arg(value_name = "OPERATIONS", help = "Path to the operations CSV file")]
    pub operations_file: PathBuf,

    #[arg(
        long = "pay-in-limit",
        value_name = "AMOUNT",
        value_parser = parse_decimal,
        help = "Maximum cumulative pay-in per account (default: 4000)"
    )]
    pub pay_in_limit: Option<Decimal>,

    #[arg(
        long = "low-funds-threshold",
        value_name = "AMOUNT",
        value_parser = parse_decimal,
        help = "Balance below which owners are warned after a debit (default: 500)"
    )]
    pub low_funds_threshold: Option<Decimal>,

    #[arg(
        long = "pay-in-warning-margin",
        value_name = "AMOUNT",
        value_parser = parse_decimal,
        help = "Remaining pay-in headroom below which owners are warned (default: 500)"
    )]
    pub pay_in_warning_margin: Option<Decimal>,
}

fn parse_decimal(value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|e| format!("'{}' is not a decimal: {}", value, e))
}

impl CliArgs {
    /// Create a LimitsConfig from CLI arguments
    ///
    /// Unset options take their default; non-positive values are replaced
    /// by the default with a warning.
    pub fn to_limits_config(&self) -> LimitsConfig {
        if self.pay_in_limit.is_none()
            && self.low_funds_threshold.is_none()
            && self.pay_in_warning_margin.is_none()
        {
            return LimitsConfig::default();
        }

        let default = LimitsConfig::default();
        LimitsConfig::new(
            self.pay_in_limit.unwrap_or(default.pay_in_limit),
            self.low_funds_threshold
                .unwrap_or(default.low_funds_threshold),
            self.pay_in_warning_margin
                .unwrap_or(default.pay_in_warning_margin),
        )
    }
}
