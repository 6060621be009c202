use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Looks up a request field, treating an explicit `null` as absent.
pub fn lookup<'a>(raw: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|value| !value.is_null())
}

/// Coerces a JSON number or numeric string into a finite `f64`.
pub fn coerce_f64(value: &Value, field: &'static str) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|number| number.is_finite())
        .ok_or(ValidationError::InvalidNumber { field })
}

/// Converts an already range-checked value into a whole number.
pub fn coerce_whole(value: f64, field: &'static str) -> Result<u32, ValidationError> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError::NotAnInteger { field });
    }
    Ok(value as u32)
}

/// Checks that `value` lies within the closed interval `range`.
pub fn check_range(
    value: f64,
    range: (f64, f64),
    field: &'static str,
) -> Result<f64, ValidationError> {
    let (min, max) = range;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(value)
}

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
