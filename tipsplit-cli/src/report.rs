//! Plain-terminal output for the `show` and `set` subcommands.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;

use tipsplit::money::MoneyFormatter;
use tipsplit::prelude::{BillState, Currency, SplitError, SplitSummary};

/// Machine-readable view of the current bill.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillReport {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub tip: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub people: Decimal,
    pub currency: Currency,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub per_person: Decimal,
    pub total_formatted: String,
    pub per_person_formatted: String,
}

impl BillReport {
    pub fn new(state: &BillState, money: &MoneyFormatter) -> Self {
        let summary = SplitSummary::from_state(state);
        Self {
            amount: state.amount.normalize(),
            tip: state.tip_percent.normalize(),
            people: state.people.normalize(),
            currency: state.currency,
            total: summary.total.normalize(),
            per_person: summary.per_person.normalize(),
            total_formatted: money.format(summary.total, state.currency),
            per_person_formatted: money.format(summary.per_person, state.currency),
        }
    }

    pub fn to_json(&self) -> Result<String, SplitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Prints the bill and its results.
pub fn print_bill(state: &BillState, money: &MoneyFormatter, explain: bool) {
    let report = BillReport::new(state, money);

    println!("\n{}", "🧾 TIPSPLIT".bright_cyan().bold());
    println!("{}", "─".repeat(32).dimmed());
    println!("  {:<18}{}", "Currency".dimmed(), report.currency);
    println!("  {:<18}{}", "Bill Amount".dimmed(), report.amount);
    println!("  {:<18}{}%", "Tip".dimmed(), report.tip);
    println!("  {:<18}{}", "Number of People".dimmed(), report.people);
    println!("{}", "─".repeat(32).dimmed());
    println!(
        "  {:<18}{}",
        "Total with Tip".bold(),
        report.total_formatted.bright_yellow().bold()
    );
    println!(
        "  {:<18}{}",
        "Per Person".bold(),
        report.per_person_formatted.bright_green().bold()
    );

    if explain {
        println!();
        print!("{}", SplitSummary::from_state(state).explain());
    }
    println!();
}
