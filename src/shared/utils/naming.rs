//! Key naming conversion between the graph (camelCase) and TMDB (snake_case)
//!
//! Conversions walk objects and arrays recursively and only touch object keys;
//! values keep their JSON types.

use serde_json::{Map, Value};

/// `release_date` -> `releaseDate`
pub fn to_camel_case(key: &str) -> String {
    let body = key.trim_start_matches('_');
    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..key.len() - body.len()]);

    for (i, segment) in body.split('_').enumerate() {
        if i == 0 {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() => {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
            // Digit-leading, empty or already-cased segments keep their separator
            _ => {
                out.push('_');
                out.push_str(segment);
            }
        }
    }
    out
}

/// `releaseDate` -> `release_date`
pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        let boundary = matches!(prev, Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit());
        if c.is_ascii_uppercase() && boundary {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Convert every key of an upstream response to camelCase
pub fn camelize_keys(value: Value) -> Value {
    convert_keys(value, &to_camel_case)
}

/// Convert every key of an outbound param map or body to snake_case
pub fn snake_case_keys(value: Value) -> Value {
    convert_keys(value, &to_snake_case)
}

fn convert_keys(value: Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                let converted = convert(&key);
                let value = convert_keys(value, convert);
                // A key already in the target convention wins a collision
                if converted == key {
                    out.insert(converted, value);
                } else {
                    out.entry(converted).or_insert(value);
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| convert_keys(v, convert)).collect())
        }
        other => other,
    }
}
