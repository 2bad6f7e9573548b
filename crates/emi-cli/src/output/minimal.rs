use emi_core::format::format_inr;
use serde_json::Value;

use super::as_money;

/// Print just the key answer value: the monthly EMI, formatted as rupees.
///
/// Falls back through the lifetime totals, then to the first field of the
/// output object.
pub fn print_minimal(value: &Value) {
    // A schedule nests its headline figures under "summary"
    let headline = value
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(value);

    let priority_keys = ["monthly_payment", "total_interest", "total_payment"];

    if let Value::Object(map) = headline {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(headline));
}

fn format_minimal(value: &Value) -> String {
    if let Some(amount) = as_money(value) {
        return format_inr(amount);
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
