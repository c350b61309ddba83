use serde_json::{Map, Value};
use std::sync::LazyLock;

static EMPTY_MAP: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

/// Returns the object under `key`, or a shared empty map when the key is
/// missing or holds anything that is not a non-null, non-array object.
pub fn dict_at<'a>(source: &'a Map<String, Value>, key: &str) -> &'a Map<String, Value> {
    match source.get(key) {
        Some(Value::Object(map)) => map,
        _ => &EMPTY_MAP,
    }
}

/// Treats the document itself as an object, or as empty when it is not one.
pub fn as_dict(value: &Value) -> &Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => &EMPTY_MAP,
    }
}

/// Normalizes a collection that producers emit either as an array or as a
/// dict keyed by an incidental identifier. Arrays come back as-is, objects as
/// their values in insertion order, anything else as empty.
pub fn ordered_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(map)) => map.values().collect(),
        _ => Vec::new(),
    }
}

/// Collection items that are not objects are skipped individually.
pub fn object_items(value: Option<&Value>) -> Vec<&Map<String, Value>> {
    ordered_list(value)
        .into_iter()
        .filter_map(Value::as_object)
        .collect()
}

pub fn str_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Non-empty string at `key`, falling back through the remaining candidates.
pub fn str_first(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| map.get(*k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn u64_field(map: &Map<String, Value>, key: &str) -> u64 {
    match map.get(key) {
        Some(v) => v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0) as u64)).unwrap_or(0),
        None => 0,
    }
}

pub fn f64_field(map: &Map<String, Value>, key: &str) -> f64 {
    map.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn opt_f64_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

pub fn bool_field(map: &Map<String, Value>, key: &str) -> bool {
    truthy(map.get(key))
}

/// Mirrors the producer's loose notion of a set flag: non-zero numbers and
/// non-empty strings count as true alongside real booleans.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        _ => false,
    }
}
