use serde_json::{Map, Value};

pub const RUN_KEY: &str = "run";

pub fn collect_run_strings(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_into(value, &mut found);
    found
}

fn collect_into(value: &Value, found: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_into(item, found);
            }
        }
        Value::Object(object) => {
            for (key, entry) in object {
                if key == RUN_KEY {
                    if let Value::String(raw) = entry {
                        found.push(raw.clone());
                    }
                }
                collect_into(entry, found);
            }
        }
        _ => {}
    }
}

pub fn map_run_strings<F>(value: &Value, mapping: &F) -> Value
where
    F: Fn(&str) -> Option<Value>,
{
    match value {
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| map_run_strings(item, mapping)).collect())
        }
        Value::Object(object) => {
            let mut out = Map::new();
            for (key, entry) in object {
                let mapped = match entry {
                    Value::String(raw) if key == RUN_KEY => {
                        mapping(raw).unwrap_or_else(|| entry.clone())
                    }
                    _ => map_run_strings(entry, mapping),
                };
                out.insert(key.clone(), mapped);
            }
            Value::Object(out)
        }
        _ => value.clone(),
    }
}

#[cfg(test)]
#[path = "run_field_test.rs"]
mod tests;
