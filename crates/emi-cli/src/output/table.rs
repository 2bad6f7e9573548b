use emi_core::format::format_inr;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{as_money, MONEY_FIELDS};

/// Render output as tables: a Field/Value card for the payment summary,
/// year panels for a schedule.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("years") => print_schedule(map),
        Value::Object(_) => print_card(value),
        _ => println!("{}", value),
    }
}

/// Two-column card, money fields grouped as rupees.
fn print_card(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_schedule(map: &serde_json::Map<String, Value>) {
    if let Some(summary) = map.get("summary") {
        print_card(summary);
    }
    if let Some(Value::String(start)) = map.get("start") {
        println!("\nFirst payment month: {}", start);
    }

    let visible = map
        .get("visible_years")
        .and_then(Value::as_u64)
        .unwrap_or(u64::MAX) as usize;
    let total = map.get("total_years").and_then(Value::as_u64).unwrap_or(0) as usize;

    let Some(Value::Array(panels)) = map.get("years") else {
        return;
    };

    for panel in panels.iter().take(visible) {
        let Value::Object(panel) = panel else { continue };
        let year = panel.get("year").and_then(Value::as_i64).unwrap_or(0);
        let months = panel.get("months").and_then(Value::as_u64).unwrap_or(0);
        let expanded = panel
            .get("expanded")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if !expanded {
            println!("\n{} ({} months, collapsed)", year, months);
            continue;
        }

        println!("\n{}", year);
        let mut builder = Builder::default();
        builder.push_record([
            "Month",
            "Principal Paid",
            "Interest Charged",
            "Total Payment",
            "Balance",
        ]);
        if let Some(Value::Array(entries)) = panel.get("entries") {
            for entry in entries {
                if let Value::Object(entry) = entry {
                    builder.push_record([
                        entry
                            .get("month")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        money_cell(entry.get("principal_paid")),
                        money_cell(entry.get("interest")),
                        money_cell(entry.get("payment")),
                        money_cell(entry.get("balance")),
                    ]);
                }
            }
        }
        println!("{}", Table::from(builder));
    }

    if visible < total {
        println!(
            "\n({} more years hidden; use --more or --expand-all)",
            total - visible
        );
    }
}

fn money_cell(value: Option<&Value>) -> String {
    value
        .and_then(as_money)
        .map(format_inr)
        .unwrap_or_default()
}

fn format_field(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        if let Some(amount) = as_money(value) {
            return format_inr(amount);
        }
    }
    format_value(value)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
