use rust_decimal::Decimal;
use std::str::FromStr;
use crate::types::SplitError;

/// Trait for converting raw field values into `Decimal`.
///
/// Lets callers hand over `i32`, `f64`, `&str`, etc. directly. Conversions fail
/// for unparseable text, NaN/infinite floats and values outside `Decimal`'s range.
pub trait IntoSplitDecimal {
    fn into_split_decimal(self) -> Result<Decimal, SplitError>;
}

impl IntoSplitDecimal for Decimal {
    fn into_split_decimal(self) -> Result<Decimal, SplitError> {
        Ok(self)
    }
}

macro_rules! impl_into_split_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoSplitDecimal for $t {
                fn into_split_decimal(self) -> Result<Decimal, SplitError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_split_decimal_int!(i32, u32, i64, u64, isize, usize);

macro_rules! impl_into_split_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoSplitDecimal for $t {
                fn into_split_decimal(self) -> Result<Decimal, SplitError> {
                    if !self.is_finite() {
                        return Err(SplitError::InvalidInput(format!("Non-finite value: {}", self)));
                    }
                    // Go through the shortest round-trip text so 0.1 stays 0.1.
                    parse_text(&self.to_string())
                }
            }
        )*
    };
}

impl_into_split_decimal_float!(f32, f64);

impl IntoSplitDecimal for &str {
    fn into_split_decimal(self) -> Result<Decimal, SplitError> {
        parse_text(self)
    }
}

impl IntoSplitDecimal for String {
    fn into_split_decimal(self) -> Result<Decimal, SplitError> {
        parse_text(&self)
    }
}

impl IntoSplitDecimal for &String {
    fn into_split_decimal(self) -> Result<Decimal, SplitError> {
        parse_text(self)
    }
}

/// Parses user-entered text. Empty text reads as zero, like an emptied number box.
fn parse_text(raw: &str) -> Result<Decimal, SplitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| SplitError::InvalidInput(format!("Invalid number '{}': {}", trimmed, e)))
}

/// Converts `raw` and clamps it to `max(floor, value)`.
///
/// Input that cannot be converted collapses to `floor` instead of being rejected.
pub fn clamp_number(raw: impl IntoSplitDecimal, floor: Decimal) -> Decimal {
    match raw.into_split_decimal() {
        Ok(value) if value < floor => {
            tracing::debug!(%value, %floor, "value below floor, clamping");
            floor
        }
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(%floor, "substituting floor for invalid input: {}", e);
            floor
        }
    }
}
