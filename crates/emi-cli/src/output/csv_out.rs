use serde_json::Value;
use std::io;

/// Write output as CSV to stdout. A schedule flattens to one row per
/// month; anything else becomes field,value rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) if map.contains_key("years") => {
            write_schedule_csv(&mut wtr, map);
        }
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
            }
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_schedule_csv(
    wtr: &mut csv::Writer<io::StdoutLock<'_>>,
    map: &serde_json::Map<String, Value>,
) {
    let _ = wtr.write_record([
        "year",
        "month",
        "principal_paid",
        "interest",
        "payment",
        "balance",
    ]);

    let Some(Value::Array(panels)) = map.get("years") else {
        return;
    };
    for panel in panels {
        let Value::Object(panel) = panel else { continue };
        let year = panel
            .get("year")
            .and_then(Value::as_i64)
            .map(|y| y.to_string())
            .unwrap_or_default();
        let Some(Value::Array(entries)) = panel.get("entries") else {
            continue;
        };
        for entry in entries {
            if let Value::Object(entry) = entry {
                let _ = wtr.write_record([
                    year.clone(),
                    field(entry, "month"),
                    field(entry, "principal_paid"),
                    field(entry, "interest"),
                    field(entry, "payment"),
                    field(entry, "balance"),
                ]);
            }
        }
    }
}

fn field(entry: &serde_json::Map<String, Value>, key: &str) -> String {
    entry.get(key).map(format_csv_value).unwrap_or_default()
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
