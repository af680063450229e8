use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::inputs::clamp_number;

/// Currencies the splitter can display amounts in.
///
/// This is a closed set: any other code is rejected and the previously
/// selected currency stays in effect.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    #[default]
    Aud,
    Usd,
    Php,
}

impl Currency {
    /// ISO 4217 code, e.g. `"AUD"`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Aud => "AUD",
            Currency::Usd => "USD",
            Currency::Php => "PHP",
        }
    }

    /// Symbol placed in front of formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Aud => "A$",
            Currency::Usd => "$",
            Currency::Php => "₱",
        }
    }

    /// The currency after this one, wrapping around. Used by selection controls.
    pub fn next(&self) -> Self {
        let all: Vec<Currency> = Currency::iter().collect();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The currency before this one, wrapping around.
    pub fn previous(&self) -> Self {
        let all: Vec<Currency> = Currency::iter().collect();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Quick-tip presets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TipPreset {
    None,
    Five,
    Ten,
    Fifteen,
}

impl TipPreset {
    pub fn percent(&self) -> Decimal {
        match self {
            TipPreset::None => Decimal::ZERO,
            TipPreset::Five => Decimal::from(5),
            TipPreset::Ten => Decimal::from(10),
            TipPreset::Fifteen => Decimal::from(15),
        }
    }

    /// Looks up a preset by its percentage value (`0`, `5`, `10` or `15`).
    pub fn from_percent(percent: u32) -> Option<Self> {
        TipPreset::iter().find(|p| p.percent() == Decimal::from(percent))
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent())
    }
}

/// The numeric fields of a [`BillState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NumericField {
    #[strum(serialize = "amount")]
    Amount,
    #[strum(serialize = "tip")]
    TipPercent,
    #[strum(serialize = "people")]
    People,
}

impl NumericField {
    /// Lowest value the field may hold. Invalid input collapses to this value.
    pub fn floor(&self) -> Decimal {
        match self {
            NumericField::Amount | NumericField::TipPercent => Decimal::ZERO,
            NumericField::People => Decimal::ONE,
        }
    }
}

/// The complete input state of a bill split.
///
/// Derived values (total, per-person share) are never stored here; see
/// [`crate::calculator::SplitSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillState {
    /// Bill amount before tip, always `>= 0`.
    pub amount: Decimal,
    /// Tip as a percentage of the amount, always `>= 0`.
    pub tip_percent: Decimal,
    /// Number of people sharing the bill, always `>= 1`.
    pub people: Decimal,
    pub currency: Currency,
}

impl Default for BillState {
    fn default() -> Self {
        Self {
            amount: NumericField::Amount.floor(),
            tip_percent: NumericField::TipPercent.floor(),
            people: NumericField::People.floor(),
            currency: Currency::default(),
        }
    }
}

impl BillState {
    /// Creates a state, clamping every numeric value to its field floor.
    pub fn new(
        amount: impl crate::inputs::IntoSplitDecimal,
        tip_percent: impl crate::inputs::IntoSplitDecimal,
        people: impl crate::inputs::IntoSplitDecimal,
        currency: Currency,
    ) -> Self {
        Self {
            amount: clamp_number(amount, NumericField::Amount.floor()),
            tip_percent: clamp_number(tip_percent, NumericField::TipPercent.floor()),
            people: clamp_number(people, NumericField::People.floor()),
            currency,
        }
    }

    /// Returns the current value of a numeric field.
    pub fn get(&self, field: NumericField) -> Decimal {
        match field {
            NumericField::Amount => self.amount,
            NumericField::TipPercent => self.tip_percent,
            NumericField::People => self.people,
        }
    }

    /// Sets a numeric field, clamping to its floor.
    pub fn set(&mut self, field: NumericField, value: Decimal) {
        let value = value.max(field.floor());
        match field {
            NumericField::Amount => self.amount = value,
            NumericField::TipPercent => self.tip_percent = value,
            NumericField::People => self.people = value,
        }
    }

    /// Whether every field satisfies its floor.
    pub fn is_valid(&self) -> bool {
        self.amount >= NumericField::Amount.floor()
            && self.tip_percent >= NumericField::TipPercent.floor()
            && self.people >= NumericField::People.floor()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("Storage Error [key: {key}]: {operation} failed: {source}")]
    Storage {
        operation: &'static str,
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
    #[error("Configuration Error: {0}")]
    Configuration(String),
}

impl SplitError {
    pub fn storage(operation: &'static str, key: impl Into<String>, source: std::io::Error) -> Self {
        SplitError::Storage {
            operation,
            key: key.into(),
            source,
        }
    }
}
