//! Property feature domain model.

use serde::Serialize;

use crate::constants::{BATHS_RANGE, BEDS_RANGE, FOOTAGE_RANGE, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::errors::ValidationError;
use crate::utils::number_utils::{check_range, coerce_whole};

/// Validated attributes of a single property.
///
/// Every field lies within its closed interval; the only way to obtain a value
/// is through [`PropertyFeatures::new`] or the request validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyFeatures {
    beds: u32,
    baths: f64,
    footage: f64,
    latitude: f64,
    longitude: f64,
}

impl PropertyFeatures {
    /// Builds a feature set, checking fields in order: beds, baths, footage,
    /// latitude, longitude.
    pub fn new(
        beds: f64,
        baths: f64,
        footage: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        let beds = coerce_whole(check_range(beds, BEDS_RANGE, "beds")?, "beds")?;
        let baths = check_range(baths, BATHS_RANGE, "baths")?;
        let footage = check_range(footage, FOOTAGE_RANGE, "footage")?;
        let latitude = check_range(latitude, LATITUDE_RANGE, "latitude")?;
        let longitude = check_range(longitude, LONGITUDE_RANGE, "longitude")?;
        Ok(Self {
            beds,
            baths,
            footage,
            latitude,
            longitude,
        })
    }

    pub fn beds(&self) -> u32 {
        self.beds
    }

    pub fn baths(&self) -> f64 {
        self.baths
    }

    pub fn footage(&self) -> f64 {
        self.footage
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Feature vector in estimator order: beds, baths, footage, latitude, longitude.
    pub fn to_vector(&self) -> [f64; 5] {
        [
            f64::from(self.beds),
            self.baths,
            self.footage,
            self.latitude,
            self.longitude,
        ]
    }
}
