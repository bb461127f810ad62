//! Feature vector layout shared by training artifacts and the backend

use serde::{Deserialize, Serialize};

/// Number of features the models were fitted on.
pub const FEATURE_COUNT: usize = 6;

/// Positions of each feature in the fitted vector.
///
/// The order is fixed at training time; the scaler means/scales and the
/// tree split indices all refer to these positions.
pub mod feature_index {
    pub const TEMPERATURE: usize = 0;
    pub const HUMIDITY: usize = 1;
    pub const PH: usize = 2;
    pub const WATER_AVAILABILITY: usize = 3;
    pub const LABEL: usize = 4;
    pub const COUNTRY: usize = 5;
}

/// One crop observation as submitted by a client, before encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropObservation {
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub water_availability: f64,
    pub label: String,
    pub country: String,
}

impl CropObservation {
    /// Assemble the raw feature vector in fitted order, given the
    /// integer codes produced by the label and country encoders.
    pub fn to_feature_vector(&self, label_code: usize, country_code: usize) -> [f64; FEATURE_COUNT] {
        [
            self.temperature,
            self.humidity,
            self.ph,
            self.water_availability,
            label_code as f64,
            country_code as f64,
        ]
    }
}
