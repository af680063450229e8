use std::str::FromStr;

use fixed_decimal::FixedDecimal;
use icu::decimal::{FixedDecimalFormatter, options::FixedDecimalFormatterOptions};
use icu::locid::Locale;
use rust_decimal::Decimal;
use writeable::Writeable;

use crate::calculator::round_money;
use crate::types::{Currency, SplitError};

pub const DEFAULT_LOCALE: &str = "en-US";

/// Locale-aware money formatting backed by ICU4X compiled data.
///
/// Output is the currency symbol followed by the amount with locale grouping
/// and exactly two fraction digits, e.g. `A$1,234.50`.
pub struct MoneyFormatter {
    locale: Locale,
    formatter: FixedDecimalFormatter,
}

impl std::fmt::Debug for MoneyFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoneyFormatter")
            .field("locale", &self.locale.to_string())
            .finish()
    }
}

impl MoneyFormatter {
    /// Creates a formatter for a BCP-47 locale tag such as `"en-US"` or `"de-DE"`.
    pub fn new(locale: &str) -> Result<Self, SplitError> {
        let locale: Locale = locale
            .parse()
            .map_err(|e| SplitError::Configuration(format!("Invalid locale '{}': {:?}", locale, e)))?;

        let formatter = FixedDecimalFormatter::try_new(
            &(&locale).into(),
            FixedDecimalFormatterOptions::default(),
        )
        .map_err(|e| SplitError::Configuration(format!("No number format data for '{}': {}", locale, e)))?;

        Ok(Self { locale, formatter })
    }

    pub fn locale(&self) -> String {
        self.locale.to_string()
    }

    /// Formats `value` in `currency`, rounding half away from zero to cents.
    pub fn format(&self, value: Decimal, currency: Currency) -> String {
        let rounded = round_money(value);
        let mut fixed = FixedDecimal::from_str(&rounded.to_string()).unwrap_or_else(|e| {
            tracing::warn!(%value, "could not convert amount for formatting: {:?}", e);
            FixedDecimal::from(0)
        });
        fixed.pad_end(-2);

        let digits = self.formatter.format(&fixed).write_to_string().into_owned();
        format!("{}{}", currency.symbol(), digits)
    }
}
