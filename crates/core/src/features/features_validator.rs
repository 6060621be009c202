use serde_json::{Map, Value};

use crate::constants::{FEATURE_FIELDS, FEATURE_RANGES};
use crate::errors::ValidationError;
use crate::features::PropertyFeatures;
use crate::utils::number_utils::{check_range, coerce_f64, coerce_whole, lookup};

/// Validates the five required property fields of a raw request object.
///
/// Presence is checked for all fields before any value is inspected, so a
/// missing field is always reported ahead of a malformed or out-of-range one.
/// Otherwise the first failing field in feature order wins, including a
/// fractional `beds`.
pub fn validate_property_features(
    raw: &Map<String, Value>,
) -> Result<PropertyFeatures, ValidationError> {
    if let Some(missing) = FEATURE_FIELDS
        .into_iter()
        .find(|field| lookup(raw, field).is_none())
    {
        return Err(ValidationError::MissingField(missing));
    }

    let mut values = [0.0; 5];
    for ((slot, field), range) in values.iter_mut().zip(FEATURE_FIELDS).zip(FEATURE_RANGES) {
        let value = lookup(raw, field).ok_or(ValidationError::MissingField(field))?;
        *slot = check_range(coerce_f64(value, field)?, range, field)?;
        if field == "beds" {
            *slot = f64::from(coerce_whole(*slot, field)?);
        }
    }

    let [beds, baths, footage, latitude, longitude] = values;
    PropertyFeatures::new(beds, baths, footage, latitude, longitude)
}
