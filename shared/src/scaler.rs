//! Per-feature standardization

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// A fitted standard scaler: for each feature, subtract the training
/// mean and divide by the training standard deviation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Number of features the scaler was fitted on.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Apply the affine transform elementwise.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.mean.len() || self.mean.len() != self.scale.len() {
            return Err(InferenceError::FeatureLengthMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_standardizes_each_feature() {
        let scaler = StandardScaler {
            mean: vec![10.0, 0.0],
            scale: vec![2.0, 4.0],
        };

        let scaled = scaler.transform(&[14.0, -2.0]).unwrap();
        assert_eq!(scaled, vec![2.0, -0.5]);
    }

    #[test]
    fn transform_maps_mean_to_zero() {
        let scaler = StandardScaler {
            mean: vec![25.5, 71.5, 6.47],
            scale: vec![5.1, 22.3, 0.77],
        };

        let scaled = scaler.transform(&[25.5, 71.5, 6.47]).unwrap();
        for value in scaled {
            assert!(value.abs() < 1e-12);
        }
    }

    #[test]
    fn transform_rejects_wrong_dimensionality() {
        let scaler = StandardScaler {
            mean: vec![0.0; 6],
            scale: vec![1.0; 6],
        };

        assert_eq!(
            scaler.transform(&[1.0, 2.0]),
            Err(InferenceError::FeatureLengthMismatch {
                expected: 6,
                actual: 2,
            })
        );
    }
}
