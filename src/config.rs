use crate::money::{DEFAULT_LOCALE, MoneyFormatter};
use crate::persistence::STORAGE_KEY;
use crate::types::SplitError;

/// Settings for a splitter session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Key the bill record is stored under.
    pub storage_key: String,
    /// BCP-47 locale used for number formatting.
    pub locale: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            storage_key: STORAGE_KEY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl SplitConfig {
    /// Checks that the key is usable and the locale has formatting data.
    pub fn validate(&self) -> Result<(), SplitError> {
        let key = self.storage_key.as_str();
        if key.trim().is_empty() {
            return Err(SplitError::Configuration("Storage key must not be empty".to_string()));
        }
        if key != key.trim() {
            return Err(SplitError::Configuration(format!(
                "Storage key '{}' must not start or end with whitespace",
                key
            )));
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(SplitError::Configuration(format!(
                "Storage key '{}' must not contain path separators",
                self.storage_key
            )));
        }
        MoneyFormatter::new(&self.locale)?;
        Ok(())
    }

    /// Builds the money formatter for the configured locale.
    pub fn money_formatter(&self) -> Result<MoneyFormatter, SplitError> {
        MoneyFormatter::new(&self.locale)
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
