//! Prelude module for tipsplit
//!
//! Re-exports the types most callers need.
//!
//! ```rust
//! use tipsplit::prelude::*;
//! ```

pub use crate::calculator::{SplitSummary, per_person, total_with_tip};
pub use crate::config::SplitConfig;
pub use crate::inputs::{IntoSplitDecimal, clamp_number};
pub use crate::money::MoneyFormatter;
pub use crate::persistence::{BillRepository, STORAGE_KEY};
pub use crate::splitter::{FieldEdit, Splitter};
pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};
pub use crate::types::{BillState, Currency, NumericField, SplitError, TipPreset};
