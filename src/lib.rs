//! # tipsplit
//!
//! Splits a bill between people: the tip-inclusive total, each person's
//! share, input clamping, a persisted state record and currency formatting.
//!
//! ```rust
//! use tipsplit::prelude::*;
//!
//! let mut splitter = Splitter::open(MemoryStore::new())?;
//! splitter.set_amount("100")?;
//! splitter.set_tip_percent("10")?;
//! splitter.set_people("4")?;
//!
//! let summary = splitter.summary();
//! let money = MoneyFormatter::new("en-US")?;
//! assert_eq!(money.format(summary.per_person, summary.currency), "A$27.50");
//! # Ok::<(), tipsplit::SplitError>(())
//! ```

pub mod calculator;
pub mod config;
pub mod inputs;
pub mod money;
pub mod persistence;
pub mod prelude;
pub mod splitter;
pub mod storage;
pub mod types;

pub use calculator::{SplitSummary, per_person, total_with_tip};
pub use config::SplitConfig;
pub use splitter::{FieldEdit, Splitter};
pub use types::{BillState, Currency, SplitError, TipPreset};
