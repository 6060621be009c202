//! Features module - property attributes and their validation.

mod features_model;
mod features_validator;


pub use features_model::PropertyFeatures;
pub use features_validator::validate_property_features;
