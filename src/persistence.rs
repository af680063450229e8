//! Saving and restoring a [`BillState`] as a single JSON record.
//!
//! Record layout:
//!
//! ```json
//! { "amount": 100, "tip": 10, "people": 4, "currency": "AUD" }
//! ```
//!
//! Numbers are written as exact JSON numbers. Reading is forgiving: text that
//! is not a JSON object is ignored, and each field that is missing or not a
//! number falls back to its own default before clamping.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::inputs::{IntoSplitDecimal, clamp_number};
use crate::storage::KeyValueStore;
use crate::types::{BillState, Currency, NumericField, SplitError};

/// Key the bill state is stored under.
pub const STORAGE_KEY: &str = "expenseData";

#[derive(Serialize)]
struct StoredRecord<'a> {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    tip: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    people: Decimal,
    currency: &'a str,
}

/// Encodes a state as the stored JSON record.
pub fn encode_record(state: &BillState) -> Result<String, SplitError> {
    let record = StoredRecord {
        amount: state.amount.normalize(),
        tip: state.tip_percent.normalize(),
        people: state.people.normalize(),
        currency: state.currency.code(),
    };
    Ok(serde_json::to_string(&record)?)
}

/// Decodes a stored record.
///
/// Returns `None` when `raw` is not a JSON object. Individual bad fields never
/// fail the decode.
pub fn decode_record(raw: &str) -> Option<BillState> {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("Ignoring unreadable stored record: {}", e);
            return None;
        }
    };

    let Value::Object(fields) = parsed else {
        warn!("Ignoring stored record that is not a JSON object");
        return None;
    };

    Some(BillState {
        amount: numeric_field(&fields, "amount", NumericField::Amount),
        tip_percent: numeric_field(&fields, "tip", NumericField::TipPercent),
        people: numeric_field(&fields, "people", NumericField::People),
        currency: currency_field(&fields),
    })
}

fn numeric_field(fields: &Map<String, Value>, name: &str, field: NumericField) -> Decimal {
    let floor = field.floor();
    match fields.get(name) {
        Some(Value::Number(n)) => clamp_number(n, floor),
        Some(Value::String(s)) if !s.trim().is_empty() => clamp_number(s.as_str(), floor),
        Some(Value::Null) | None => floor,
        Some(other) => {
            debug!(field = name, "non-numeric stored value {}, using default", other);
            floor
        }
    }
}

fn currency_field(fields: &Map<String, Value>) -> Currency {
    match fields.get("currency") {
        Some(Value::String(code)) => Currency::from_str(code).unwrap_or_else(|_| {
            debug!(code = %code, "unknown stored currency, using default");
            Currency::default()
        }),
        _ => Currency::default(),
    }
}

/// Loads, saves and clears the bill state under one fixed key.
#[derive(Debug, Clone)]
pub struct BillRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BillRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Reads the stored state.
    ///
    /// `Ok(None)` covers both "nothing stored" and "stored record unreadable".
    /// Only failures of the store itself are returned as errors.
    pub fn load(&self) -> Result<Option<BillState>, SplitError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let state = decode_record(&raw);
        if let Some(state) = &state {
            debug!(key = %self.key, ?state, "loaded stored state");
        }
        Ok(state)
    }

    /// Writes `state`, overwriting any previous record.
    pub fn save(&mut self, state: &BillState) -> Result<(), SplitError> {
        let encoded = encode_record(state)?;
        self.store.set(&self.key, &encoded)?;
        debug!(key = %self.key, record = %encoded, "saved state");
        Ok(())
    }

    /// Deletes the stored record.
    pub fn clear(&mut self) -> Result<(), SplitError> {
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "cleared stored state");
        Ok(())
    }
}

// Stored numbers are also accepted through the generic conversion path.
impl IntoSplitDecimal for &serde_json::Number {
    fn into_split_decimal(self) -> Result<Decimal, SplitError> {
        self.to_string().into_split_decimal()
    }
}
