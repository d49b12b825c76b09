//! Rendering of calculation results as a console table or JSON.

use anyhow::Result;
use bracket_core::calculations::common::round_half_up;
use bracket_core::{BracketTax, TaxCalculation};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

#[derive(Debug, Clone, Tabled)]
struct BracketRow {
    #[tabled(rename = "Bracket")]
    range: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Taxable")]
    taxable: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

impl From<&BracketTax> for BracketRow {
    fn from(entry: &BracketTax) -> Self {
        BracketRow {
            range: format_range(entry.bracket.min_income, entry.bracket.max_income),
            rate: format!("{}%", entry.bracket.rate),
            taxable: format_amount(entry.taxable_amount),
            tax: format_amount(entry.tax),
        }
    }
}

fn format_range(
    min: Decimal,
    max: Option<Decimal>,
) -> String {
    match max {
        Some(max) => format!("{min} - {max}"),
        None => format!("{min}+"),
    }
}

fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Effective rate is a fraction; shown as a percentage.
fn format_rate(rate: Decimal) -> String {
    format!("{:.4}%", rate * Decimal::ONE_HUNDRED)
}

pub fn print_table(
    calculation: &TaxCalculation,
    tax_year: i32,
) {
    println!();
    println!("TAX CALCULATION ({tax_year})");
    println!();
    println!("Income:         {}", format_amount(calculation.income));
    println!("Total tax:      {}", format_amount(calculation.total_tax));
    println!(
        "Effective rate: {}",
        format_rate(calculation.effective_rate)
    );
    println!();

    if calculation.tax_by_bracket.is_empty() {
        println!("(no taxable income)");
        return;
    }

    let rows: Vec<BracketRow> = calculation.tax_by_bracket.iter().map(BracketRow::from).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tax_year: i32,
    #[serde(flatten)]
    calculation: &'a TaxCalculation,
}

pub fn print_json(
    calculation: &TaxCalculation,
    tax_year: i32,
) -> Result<()> {
    let output = JsonReport {
        tax_year,
        calculation,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
