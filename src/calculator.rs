//! Derived values of a bill split.
//!
//! Everything here is pure: the functions take the current [`BillState`] (or
//! its parts) and return fresh values. Nothing is cached; the arithmetic is
//! constant time, so callers simply recompute after every edit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{BillState, Currency};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Bill amount plus the tip: `amount + amount * tip_percent / 100`.
///
/// Saturates at `Decimal::MAX` only when the result itself does not fit.
pub fn total_with_tip(amount: Decimal, tip_percent: Decimal) -> Decimal {
    // Scale down before multiplying when the full product would overflow.
    let tip = amount
        .checked_mul(tip_percent)
        .map(|product| product / HUNDRED)
        .or_else(|| (amount / HUNDRED).checked_mul(tip_percent))
        .or_else(|| amount.checked_mul(tip_percent / HUNDRED));
    match tip {
        Some(tip) => amount.saturating_add(tip),
        None => Decimal::MAX,
    }
}

/// Share of `total` for each person, or zero when `people` is not positive.
pub fn per_person(total: Decimal, people: Decimal) -> Decimal {
    if people > Decimal::ZERO {
        total.checked_div(people).unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    }
}

/// Kind of operation recorded in a [`CalculationStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Initial,
    Rate,
    Add,
    Divide,
    Result,
}

impl Operation {
    fn symbol(&self) -> &'static str {
        match self {
            Operation::Initial => " ",
            Operation::Rate => "%",
            Operation::Add => "+",
            Operation::Divide => "/",
            Operation::Result => "=",
        }
    }
}

/// A single step in the split calculation, kept for display and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub description: String,
    pub amount: Decimal,
    pub operation: Operation,
}

impl CalculationStep {
    fn new(description: impl Into<String>, amount: Decimal, operation: Operation) -> Self {
        Self {
            description: description.into(),
            amount,
            operation,
        }
    }
}

/// All values shown to the user for one [`BillState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSummary {
    pub amount: Decimal,
    pub tip_percent: Decimal,
    pub tip_amount: Decimal,
    pub total: Decimal,
    pub people: Decimal,
    pub per_person: Decimal,
    pub currency: Currency,
}

impl SplitSummary {
    pub fn from_state(state: &BillState) -> Self {
        let total = total_with_tip(state.amount, state.tip_percent);
        Self {
            amount: state.amount,
            tip_percent: state.tip_percent,
            tip_amount: total - state.amount,
            total,
            people: state.people,
            per_person: per_person(total, state.people),
            currency: state.currency,
        }
    }

    /// Step-by-step trace of how the total and share were derived.
    pub fn trace(&self) -> Vec<CalculationStep> {
        vec![
            CalculationStep::new("Bill Amount", self.amount, Operation::Initial),
            CalculationStep::new("Tip Rate", self.tip_percent, Operation::Rate),
            CalculationStep::new("Tip Amount", self.tip_amount, Operation::Add),
            CalculationStep::new("Total with Tip", self.total, Operation::Result),
            CalculationStep::new("People", self.people, Operation::Divide),
            CalculationStep::new("Per Person", self.per_person, Operation::Result),
        ]
    }

    /// Renders [`Self::trace`] as an aligned, human-readable breakdown.
    pub fn explain(&self) -> String {
        use std::fmt::Write;

        let trace = self.trace();
        let width = trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        let _ = writeln!(output, "Split breakdown ({}):", self.currency);
        let _ = writeln!(output, "{:-<40}", "");
        for step in &trace {
            let value = match step.operation {
                Operation::Rate => format!("{}%", step.amount.normalize()),
                Operation::Divide => step.amount.normalize().to_string(),
                _ => format!("{:.2}", round_money(step.amount)),
            };
            let _ = writeln!(
                output,
                "  {:<width$} : {} {:>12}",
                step.description,
                step.operation.symbol(),
                value,
                width = width
            );
        }
        let _ = writeln!(output, "{:-<40}", "");
        output
    }
}

/// Rounds to cents, halves away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
