//! The splitter controller: owns the bill state and its persistence.
//!
//! Every change goes through [`Splitter::apply`]. An edit is clamped, written
//! to the store, and only then committed in memory, so the state a caller
//! observes always matches the stored record.

use std::str::FromStr;

use tracing::{debug, info};

use crate::calculator::SplitSummary;
use crate::inputs::clamp_number;
use crate::persistence::BillRepository;
use crate::storage::KeyValueStore;
use crate::types::{BillState, Currency, NumericField, SplitError, TipPreset};

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Raw text typed into the bill amount field.
    Amount(String),
    /// Raw text typed into the tip percentage field.
    TipPercent(String),
    /// Raw text typed into the people field.
    People(String),
    Preset(TipPreset),
    Currency(Currency),
}

pub struct Splitter<S: KeyValueStore> {
    state: BillState,
    repo: BillRepository<S>,
}

impl<S: KeyValueStore> std::fmt::Debug for Splitter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Splitter")
            .field("state", &self.state)
            .field("key", &self.repo.key())
            .finish()
    }
}

impl<S: KeyValueStore> Splitter<S> {
    /// Opens a splitter over `store`, restoring the stored state if there is one.
    pub fn open(store: S) -> Result<Self, SplitError> {
        Self::from_repository(BillRepository::new(store))
    }

    /// Like [`Splitter::open`] but reads and writes under `key`.
    pub fn open_with_key(store: S, key: impl Into<String>) -> Result<Self, SplitError> {
        Self::from_repository(BillRepository::with_key(store, key))
    }

    fn from_repository(repo: BillRepository<S>) -> Result<Self, SplitError> {
        let state = match repo.load()? {
            Some(state) => {
                info!(key = %repo.key(), "restored saved bill");
                state
            }
            None => BillState::default(),
        };
        Ok(Self { state, repo })
    }

    pub fn state(&self) -> &BillState {
        &self.state
    }

    pub fn repository(&self) -> &BillRepository<S> {
        &self.repo
    }

    /// Derived totals for the current state.
    pub fn summary(&self) -> SplitSummary {
        SplitSummary::from_state(&self.state)
    }

    /// Applies one edit, persists the result and returns the new state.
    ///
    /// Invalid numbers are clamped to the field floor, never rejected. If the
    /// store fails, the error is returned and the in-memory state is unchanged.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<&BillState, SplitError> {
        let mut next = self.state.clone();
        match &edit {
            FieldEdit::Amount(raw) => set_numeric(&mut next, NumericField::Amount, raw),
            FieldEdit::TipPercent(raw) => set_numeric(&mut next, NumericField::TipPercent, raw),
            FieldEdit::People(raw) => set_numeric(&mut next, NumericField::People, raw),
            FieldEdit::Preset(preset) => next.set(NumericField::TipPercent, preset.percent()),
            FieldEdit::Currency(currency) => next.currency = *currency,
        }

        self.repo.save(&next)?;
        debug!(?edit, ?next, "edit committed");
        self.state = next;
        Ok(&self.state)
    }

    pub fn set_amount(&mut self, raw: &str) -> Result<&BillState, SplitError> {
        self.apply(FieldEdit::Amount(raw.to_string()))
    }

    pub fn set_tip_percent(&mut self, raw: &str) -> Result<&BillState, SplitError> {
        self.apply(FieldEdit::TipPercent(raw.to_string()))
    }

    pub fn set_people(&mut self, raw: &str) -> Result<&BillState, SplitError> {
        self.apply(FieldEdit::People(raw.to_string()))
    }

    pub fn apply_preset(&mut self, preset: TipPreset) -> Result<&BillState, SplitError> {
        self.apply(FieldEdit::Preset(preset))
    }

    pub fn select_currency(&mut self, currency: Currency) -> Result<&BillState, SplitError> {
        self.apply(FieldEdit::Currency(currency))
    }

    /// Selects a currency by code.
    ///
    /// Returns `Ok(false)` without touching state or storage when the code is
    /// not one of the supported currencies.
    pub fn select_currency_code(&mut self, code: &str) -> Result<bool, SplitError> {
        match Currency::from_str(code.trim()) {
            Ok(currency) => {
                self.select_currency(currency)?;
                Ok(true)
            }
            Err(_) => {
                debug!(code, current = %self.state.currency, "ignoring unsupported currency");
                Ok(false)
            }
        }
    }

    /// Restores the default state and deletes the stored record.
    pub fn reset(&mut self) -> Result<&BillState, SplitError> {
        self.repo.clear()?;
        self.state = BillState::default();
        info!(key = %self.repo.key(), "bill reset");
        Ok(&self.state)
    }

    pub fn into_store(self) -> S {
        self.repo.into_store()
    }
}

fn set_numeric(state: &mut BillState, field: NumericField, raw: &str) {
    state.set(field, clamp_number(raw, field.floor()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::STORAGE_KEY;
    use crate::storage::MemoryStore;
    use rust_decimal_macros::dec;

    #[test]
    fn test_open_empty_store_uses_defaults() {
        let splitter = Splitter::open(MemoryStore::new()).unwrap();
        assert_eq!(splitter.state(), &BillState::default());
    }

    #[test]
    fn test_every_edit_is_saved() {
        let mut splitter = Splitter::open(MemoryStore::new()).unwrap();
        splitter.set_amount("100").unwrap();
        let stored = splitter.repository().load().unwrap().unwrap();
        assert_eq!(stored.amount, dec!(100));

        splitter.set_people("4").unwrap();
        let stored = splitter.repository().load().unwrap().unwrap();
        assert_eq!(stored.people, dec!(4));
    }

    #[test]
    fn test_invalid_edits_clamp() {
        let mut splitter = Splitter::open(MemoryStore::new()).unwrap();
        splitter.set_amount("-20").unwrap();
        splitter.set_tip_percent("lots").unwrap();
        splitter.set_people("0").unwrap();
        assert_eq!(splitter.state(), &BillState::default());
    }

    #[test]
    fn test_large_bill_total_stays_exact() {
        let mut splitter = Splitter::open(MemoryStore::new()).unwrap();
        splitter.set_amount("100000000000000000000").unwrap();
        splitter.set_tip_percent("1000000000").unwrap();
        assert_eq!(splitter.summary().total, dec!(1000000100000000000000000000));
    }

    #[test]
    fn test_unknown_currency_keeps_previous() {
        let mut splitter = Splitter::open(MemoryStore::new()).unwrap();
        assert!(splitter.select_currency_code("php").unwrap());
        assert!(!splitter.select_currency_code("EUR").unwrap());
        assert_eq!(splitter.state().currency, Currency::Php);
    }

    #[test]
    fn test_rejected_currency_does_not_write() {
        let mut splitter = Splitter::open(MemoryStore::new()).unwrap();
        splitter.select_currency_code("XYZ").unwrap();
        assert!(!splitter.into_store().contains(STORAGE_KEY));
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, SplitError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), SplitError> {
            Err(SplitError::storage(
                "write",
                key,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }

        fn remove(&mut self, key: &str) -> Result<(), SplitError> {
            Err(SplitError::storage(
                "delete",
                key,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }
    }

    #[test]
    fn test_failed_save_leaves_state_untouched() {
        let mut splitter = Splitter::open(ReadOnlyStore).unwrap();
        let err = splitter.set_amount("50").unwrap_err();
        assert!(matches!(err, SplitError::Storage { operation: "write", .. }));
        assert_eq!(splitter.state().amount, dec!(0));

        assert!(splitter.reset().is_err());
        assert_eq!(splitter.state(), &BillState::default());
    }

    #[test]
    fn test_custom_key() {
        let mut splitter = Splitter::open_with_key(MemoryStore::new(), "other").unwrap();
        splitter.set_amount("1").unwrap();
        let store = splitter.into_store();
        assert!(store.contains("other"));
        assert!(!store.contains(STORAGE_KEY));
    }
}
