//! Application state for the splitter screen.

use strum::IntoEnumIterator;
use tui_input::Input;

use tipsplit::money::MoneyFormatter;
use tipsplit::prelude::*;

use crate::tui::theme::icons;

/// Form row that currently has keyboard focus, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Currency,
    #[default]
    Amount,
    Tip,
    Presets,
    People,
    Reset,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Currency,
        Focus::Amount,
        Focus::Tip,
        Focus::Presets,
        Focus::People,
        Focus::Reset,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The numeric field edited on this row, if any.
    pub fn numeric_field(self) -> Option<NumericField> {
        match self {
            Focus::Amount => Some(NumericField::Amount),
            Focus::Tip => Some(NumericField::TipPercent),
            Focus::People => Some(NumericField::People),
            _ => None,
        }
    }
}

/// Type of status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Main application state
pub struct App<S: KeyValueStore> {
    /// Whether the app should keep running
    pub running: bool,
    pub splitter: Splitter<S>,
    pub money: MoneyFormatter,
    pub focus: Focus,
    /// Text buffer for the numeric field being edited
    pub input: Input,
    /// Whether `input` is open on the focused field
    pub editing: bool,
    /// Highlighted quick-tip preset
    pub preset_index: usize,
    /// Status message to display
    pub message: Option<(String, MessageType)>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(splitter: Splitter<S>, money: MoneyFormatter) -> Self {
        Self {
            running: true,
            splitter,
            money,
            focus: Focus::default(),
            input: Input::default(),
            editing: false,
            preset_index: 0,
            message: None,
        }
    }

    pub fn presets() -> Vec<TipPreset> {
        TipPreset::iter().collect()
    }

    pub fn state(&self) -> &BillState {
        self.splitter.state()
    }

    /// Formats an amount in the selected currency.
    pub fn format_money(&self, value: rust_decimal::Decimal) -> String {
        self.money.format(value, self.state().currency)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Opens the text buffer on the focused numeric field, prefilled with its value.
    pub fn start_editing(&mut self) {
        if let Some(field) = self.focus.numeric_field() {
            let current = self.state().get(field).normalize().to_string();
            self.input = Input::default().with_value(current);
            self.editing = true;
        }
    }

    /// Opens an empty text buffer on the focused numeric field.
    pub fn start_editing_blank(&mut self) {
        if self.focus.numeric_field().is_some() {
            self.input = Input::default();
            self.editing = true;
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.input = Input::default();
    }

    /// Commits the text buffer to the focused field.
    pub fn commit_editing(&mut self) {
        let raw = self.input.value().to_string();
        let edit = match self.focus {
            Focus::Amount => FieldEdit::Amount(raw),
            Focus::Tip => FieldEdit::TipPercent(raw),
            Focus::People => FieldEdit::People(raw),
            _ => return self.cancel_editing(),
        };
        self.apply(edit);
        self.cancel_editing();
    }

    pub fn cycle_currency(&mut self, forward: bool) {
        let current = self.state().currency;
        let currency = if forward { current.next() } else { current.previous() };
        self.apply(FieldEdit::Currency(currency));
    }

    pub fn move_preset(&mut self, forward: bool) {
        let len = Self::presets().len();
        self.preset_index = if forward {
            (self.preset_index + 1) % len
        } else {
            (self.preset_index + len - 1) % len
        };
    }

    pub fn apply_preset(&mut self, preset: TipPreset) {
        if let Some(idx) = Self::presets().iter().position(|p| *p == preset) {
            self.preset_index = idx;
        }
        if self.apply(FieldEdit::Preset(preset)) {
            self.message = Some((format!("Tip set to {}", preset.label()), MessageType::Info));
        }
    }

    pub fn apply_selected_preset(&mut self) {
        if let Some(preset) = Self::presets().get(self.preset_index).copied() {
            self.apply_preset(preset);
        }
    }

    pub fn reset(&mut self) {
        match self.splitter.reset() {
            Ok(_) => {
                self.preset_index = 0;
                self.message = Some((format!("{} Reset", icons::CHECK), MessageType::Success));
            }
            Err(e) => {
                tracing::error!("reset failed: {}", e);
                self.message = Some((e.to_string(), MessageType::Error));
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Runs an edit through the splitter. Storage failures become a status message.
    fn apply(&mut self, edit: FieldEdit) -> bool {
        match self.splitter.apply(edit) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("could not save edit: {}", e);
                self.message = Some((e.to_string(), MessageType::Error));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn app() -> App<MemoryStore> {
        let splitter = Splitter::open(MemoryStore::new()).unwrap();
        App::new(splitter, MoneyFormatter::new("en-US").unwrap())
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(Focus::Reset.next(), Focus::Currency);
        assert_eq!(Focus::Currency.previous(), Focus::Reset);
    }

    #[test]
    fn test_edit_commit_clamps() {
        let mut app = app();
        app.focus = Focus::People;
        app.start_editing();
        assert_eq!(app.input.value(), "1");

        app.input = Input::default().with_value("-3".to_string());
        app.commit_editing();
        assert!(!app.editing);
        assert_eq!(app.state().people, dec!(1));
    }

    #[test]
    fn test_preset_selection() {
        let mut app = app();
        app.move_preset(true);
        app.move_preset(true);
        app.apply_selected_preset();
        assert_eq!(app.state().tip_percent, dec!(10));

        app.move_preset(false);
        app.move_preset(false);
        app.move_preset(false);
        assert_eq!(app.preset_index, 3);
    }

    #[test]
    fn test_currency_cycle_and_format() {
        let mut app = app();
        app.cycle_currency(true);
        assert_eq!(app.state().currency, Currency::Usd);
        assert_eq!(app.format_money(dec!(5)), "$5.00");
    }
}
