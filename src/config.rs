//! Threshold configuration
//!
//! Every monetary threshold the services compare against lives here and is
//! injected into the debit and credit services at construction time.

use rust_decimal::Decimal;

/// Deployment-wide monetary limits
///
/// Shared by every account; there are no per-account overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitsConfig {
    /// Ceiling on cumulative credits into an account
    pub pay_in_limit: Decimal,
    /// Balance below which the low-funds notification fires after a debit
    pub low_funds_threshold: Decimal,
    /// Remaining pay-in headroom below which the approaching-limit
    /// notification fires after a credit
    pub pay_in_warning_margin: Decimal,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            pay_in_limit: Decimal::new(4000, 0),
            low_funds_threshold: Decimal::new(500, 0),
            pay_in_warning_margin: Decimal::new(500, 0),
        }
    }
}

impl LimitsConfig {
    /// Create a new LimitsConfig with custom values
    ///
    /// Non-positive values are replaced by the default with a warning.
    pub fn new(
        pay_in_limit: Decimal,
        low_funds_threshold: Decimal,
        pay_in_warning_margin: Decimal,
    ) -> Self {
        let default = Self::default();

        Self {
            pay_in_limit: positive_or_default("pay_in_limit", pay_in_limit, default.pay_in_limit),
            low_funds_threshold: positive_or_default(
                "low_funds_threshold",
                low_funds_threshold,
                default.low_funds_threshold,
            ),
            pay_in_warning_margin: positive_or_default(
                "pay_in_warning_margin",
                pay_in_warning_margin,
                default.pay_in_warning_margin,
            ),
        }
    }
}

fn positive_or_default(name: &str, value: Decimal, default: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        tracing::warn!(
            setting = name,
            %value,
            %default,
            "Invalid limit, using default"
        );
        default
    }
}
