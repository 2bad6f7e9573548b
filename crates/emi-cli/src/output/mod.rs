pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Fields that hold rupee amounts and render through the INR formatter.
/// Money serialises as decimal strings, so renderers parse before grouping.
pub(crate) const MONEY_FIELDS: &[&str] = &[
    "principal",
    "monthly_payment",
    "total_interest",
    "total_payment",
    "principal_paid",
    "interest",
    "payment",
    "balance",
];

/// Parse a serialised Money value back into a Decimal, if it is one.
pub(crate) fn as_money(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}
