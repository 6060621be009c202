/// Request keys of the feature vector, in the order estimators consume them.
pub const FEATURE_FIELDS: [&str; 5] = ["beds", "baths", "footage", "latitude", "longitude"];

/// Display names reported in `model_info.features`.
pub const FEATURE_DISPLAY_NAMES: [&str; 5] = ["Beds", "Baths", "Footage", "Latitude", "Longitude"];

/// Closed interval for bedrooms
pub const BEDS_RANGE: (f64, f64) = (0.0, 10.0);

/// Closed interval for bathrooms
pub const BATHS_RANGE: (f64, f64) = (0.5, 10.0);

/// Closed interval for square footage
pub const FOOTAGE_RANGE: (f64, f64) = (250.0, 10000.0);

/// Closed interval for latitude (San Francisco area)
pub const LATITUDE_RANGE: (f64, f64) = (37.6, 37.9);

/// Closed interval for longitude (San Francisco area)
pub const LONGITUDE_RANGE: (f64, f64) = (-122.6, -122.3);

/// Default half-width of the confidence band as a fraction of the estimate
pub const DEFAULT_CONFIDENCE_SPREAD: f64 = 0.10;

/// Decimal precision for monetary values in responses
pub const DISPLAY_DECIMAL_PRECISION: i32 = 2;

/// Closed intervals in feature vector order.
pub const FEATURE_RANGES: [(f64, f64); 5] = [
    BEDS_RANGE,
    BATHS_RANGE,
    FOOTAGE_RANGE,
    LATITUDE_RANGE,
    LONGITUDE_RANGE,
];
