use std::sync::OnceLock;

use serde_json::Value;

/// A JSON object, as carried in `ResourceProperties` and `Data`.
pub type Map = serde_json::Map<String, Value>;

pub(crate) fn empty() -> &'static Map {
    static EMPTY: OnceLock<Map> = OnceLock::new();
    EMPTY.get_or_init(Map::new)
}

/// Heuristic type conversion of the string values in `properties`.
///
/// CloudFormation passes every property as a string. This walks nested objects and arrays,
/// turning `"true"`/`"false"` into booleans and signed or unsigned decimal integers into
/// numbers. Anything else, including the empty string, stays a string.
pub fn heuristic_convert_property_types(properties: &mut Map) {
    for value in properties.values_mut() {
        convert_value(value);
    }
}

fn convert_value(value: &mut Value) {
    let converted = match value {
        Value::Object(map) => return heuristic_convert_property_types(map),
        Value::Array(items) => return items.iter_mut().for_each(convert_value),
        Value::String(s) => match &s[..] {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            s => match parse_int(s) {
                Some(n) => n,
                None => return,
            },
        },
        _ => return,
    };
    *value = converted;
}

fn parse_int(s: &str) -> Option<Value> {
    let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // out of range integers stay strings
    match s.parse::<i64>() {
        Ok(n) => Some(n.into()),
        Err(..) => digits.parse::<u64>().ok().filter(|_| !s.starts_with('-')).map(Into::into),
    }
}
