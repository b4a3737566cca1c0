use crate::pretty::heading;
use serde_json::Value;

/// Render an opaque API payload: top-level object keys one per line,
/// anything else as pretty JSON.
pub fn render_payload(title: &str, payload: &Value, json: bool, color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    }
    let mut out = format!("{}\n", heading(title, color));
    match payload {
        Value::Object(map) if !map.is_empty() => {
            let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
            for (key, value) in map {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                out.push_str(&format!("  {key:<width$}  {rendered}\n"));
            }
        }
        Value::Object(_) | Value::Null => out.push_str("  No data.\n"),
        other => {
            let pretty = serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string());
            for line in pretty.lines() {
                out.push_str(&format!("  {line}\n"));
            }
        }
    }
    out
}
