use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// Arrays of records (the schedule and breakdown subcommands) become row
/// CSV suitable for charting tools. Envelope results become two-column
/// field/value CSV, with the nested schedule emitted as its own block.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    // Flexible: the summary rows and the schedule block differ in width
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                let _ = wtr.write_record(["field", "value"]);
                let mut schedules: Vec<&Vec<Value>> = Vec::new();
                for (key, val) in result {
                    if let Value::Array(arr) = val {
                        if arr.first().map(Value::is_object).unwrap_or(false) {
                            schedules.push(arr);
                            continue;
                        }
                    }
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
                for arr in schedules {
                    let _ = wtr.write_record([""]);
                    write_array_csv(&mut wtr, arr);
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    // Extract headers from first object
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(*h)
                            .map(format_csv_value)
                            .unwrap_or_default()
                    })
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
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
