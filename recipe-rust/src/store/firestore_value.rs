//! Conversion between plain JSON and Firestore's typed value encoding.
//!
//! `{"calories": 250}` is stored as `{"calories": {"integerValue": "250"}}`;
//! maps and arrays nest as `mapValue.fields` and `arrayValue.values`.
use serde_json::{Map, Number, Value};

/// Encode a JSON object as a Firestore `fields` map.
pub fn to_fields(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .map(|(key, value)| (key.clone(), to_value(value)))
        .collect()
}

pub fn to_value(value: &Value) -> Value {
    let mut typed = Map::new();
    match value {
        Value::Null => {
            typed.insert("nullValue".to_string(), Value::Null);
        }
        Value::Bool(flag) => {
            typed.insert("booleanValue".to_string(), Value::Bool(*flag));
        }
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                typed.insert(
                    "integerValue".to_string(),
                    Value::String(number.to_string()),
                );
            } else {
                typed.insert("doubleValue".to_string(), Value::Number(number.clone()));
            }
        }
        Value::String(text) => {
            typed.insert("stringValue".to_string(), Value::String(text.clone()));
        }
        Value::Array(items) => {
            let mut array = Map::new();
            array.insert(
                "values".to_string(),
                Value::Array(items.iter().map(to_value).collect()),
            );
            typed.insert("arrayValue".to_string(), Value::Object(array));
        }
        Value::Object(object) => {
            let mut map = Map::new();
            map.insert("fields".to_string(), Value::Object(to_fields(object)));
            typed.insert("mapValue".to_string(), Value::Object(map));
        }
    }
    Value::Object(typed)
}

/// Decode a Firestore `fields` map back into a JSON object.
pub fn from_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>, String> {
    fields
        .iter()
        .map(|(key, value)| {
            from_value(value)
                .map(|decoded| (key.clone(), decoded))
                .map_err(|error| format!("{key}: {error}"))
        })
        .collect()
}

pub fn from_value(value: &Value) -> Result<Value, String> {
    let typed = value
        .as_object()
        .ok_or_else(|| format!("expected a typed value object, got {value}"))?;
    let (kind, inner) = typed
        .iter()
        .next()
        .ok_or_else(|| "empty typed value".to_string())?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" | "stringValue" | "referenceValue" | "timestampValue"
        | "bytesValue" => Ok(inner.clone()),
        "integerValue" => decode_integer(inner),
        "arrayValue" => {
            let values: Vec<Value> = match inner.get("values") {
                Some(Value::Array(values)) => values.iter().map(from_value).collect(),
                Some(other) => Err(format!("arrayValue.values is not an array: {other}")),
                None => Ok(Vec::new()),
            }?;
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => from_fields(fields).map(Value::Object),
            Some(other) => Err(format!("mapValue.fields is not an object: {other}")),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(format!("unsupported value type `{other}`")),
    }
}

/// Firestore sends int64 values as decimal strings.
fn decode_integer(inner: &Value) -> Result<Value, String> {
    match inner {
        Value::String(text) => text
            .parse::<i64>()
            .map(|integer| Value::Number(Number::from(integer)))
            .map_err(|error| format!("invalid integerValue `{text}`: {error}")),
        Value::Number(number) => Ok(Value::Number(number.clone())),
        other => Err(format!("invalid integerValue {other}")),
    }
}
