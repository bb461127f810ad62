//! Season prediction pipeline
//!
//! The straight-line inference sequence: encode categoricals, scale the
//! numeric vector, run the classifier(s), decode the class codes back
//! to season names.

use std::sync::Arc;

use serde_json::{Map, Value};
use shared::CropObservation;

use crate::artifacts::ModelArtifacts;
use crate::config::PredictionOutputs;
use crate::error::{AppError, AppResult};

/// Prediction service running the fitted artifacts on one observation
#[derive(Clone)]
pub struct PredictionService {
    artifacts: Arc<ModelArtifacts>,
    outputs: PredictionOutputs,
}

/// Decoded prediction for one observation
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonPrediction {
    pub label: String,
    pub harvest_season: String,
    pub planting_season: Option<String>,
}

impl PredictionService {
    pub fn new(artifacts: Arc<ModelArtifacts>, outputs: PredictionOutputs) -> Self {
        Self { artifacts, outputs }
    }

    /// Run the full pipeline for one observation.
    pub fn predict(&self, observation: &CropObservation) -> AppResult<SeasonPrediction> {
        let bundle = &self.artifacts.bundle;

        let label_code = bundle.label_encoder.transform("label", &observation.label)?;
        let country_code = bundle
            .country_encoder
            .transform("country", &observation.country)?;

        let features = observation.to_feature_vector(label_code, country_code);
        let scaled = self.artifacts.scaler.transform(&features)?;

        let harvest_code = bundle.harvest_model.predict(&scaled)?;
        let harvest_season = bundle
            .harvest_season_encoder
            .inverse_transform(harvest_code)?
            .to_string();

        let planting_season = match self.outputs {
            PredictionOutputs::Harvest => None,
            PredictionOutputs::PlantingAndHarvest => {
                // Presence is checked at startup; a bundle swapped out from
                // under the configuration is still reported, not unwrapped.
                let (model, encoder) = bundle
                    .planting_model
                    .as_ref()
                    .zip(bundle.planting_season_encoder.as_ref())
                    .ok_or_else(|| {
                        AppError::Configuration(
                            "bundle does not include a planting model".into(),
                        )
                    })?;
                let planting_code = model.predict(&scaled)?;
                Some(encoder.inverse_transform(planting_code)?.to_string())
            }
        };

        Ok(SeasonPrediction {
            label: observation.label.clone(),
            harvest_season,
            planting_season,
        })
    }
}

impl SeasonPrediction {
    /// Build the JSON response body.
    ///
    /// The dual-output keys interpolate the requested crop label, wire
    /// format kept from the original deployment.
    pub fn into_response_body(self) -> Value {
        let mut body = Map::new();
        match self.planting_season {
            None => {
                body.insert(
                    "Best_Harvest_Season".to_string(),
                    Value::String(self.harvest_season),
                );
            }
            Some(planting_season) => {
                body.insert(
                    format!(
                        "The predicted best season to plant {} based on the information provided is",
                        self.label
                    ),
                    Value::String(planting_season),
                );
                body.insert(
                    format!(
                        "The predicted best harvest season of {} that will result in optimum yield is",
                        self.label
                    ),
                    Value::String(self.harvest_season),
                );
            }
        }
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DecisionTree, InferenceError, LabelEncoder, ModelBundle, StandardScaler, TreeNode};

    fn encoder(classes: &[&str]) -> LabelEncoder {
        LabelEncoder::new(classes.iter().map(|c| c.to_string()).collect())
    }

    /// Humid observations (scaled humidity > 0) map to class 0,
    /// everything else to class 1.
    fn humidity_stump() -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 1,
                    threshold: 0.0,
                    left: 2,
                    right: 1,
                },
                TreeNode::Leaf { class: 0 },
                TreeNode::Leaf { class: 1 },
            ],
        }
    }

    fn test_artifacts() -> Arc<ModelArtifacts> {
        Arc::new(ModelArtifacts {
            bundle: ModelBundle {
                harvest_model: humidity_stump(),
                planting_model: Some(humidity_stump()),
                label_encoder: encoder(&["maize", "rice"]),
                country_encoder: encoder(&["India", "Nigeria"]),
                harvest_season_encoder: encoder(&["Kharif", "Rabi"]),
                planting_season_encoder: Some(encoder(&["Monsoon", "Winter"])),
            },
            scaler: StandardScaler {
                mean: vec![25.0, 70.0, 6.5, 100.0, 0.5, 0.5],
                scale: vec![5.0, 20.0, 1.0, 50.0, 0.5, 0.5],
            },
        })
    }

    fn humid_rice() -> CropObservation {
        CropObservation {
            temperature: 25.0,
            humidity: 80.0,
            ph: 6.5,
            water_availability: 200.0,
            label: "rice".to_string(),
            country: "India".to_string(),
        }
    }

    #[test]
    fn harvest_only_prediction() {
        let service = PredictionService::new(test_artifacts(), PredictionOutputs::Harvest);
        let prediction = service.predict(&humid_rice()).unwrap();
        assert_eq!(prediction.harvest_season, "Kharif");
        assert_eq!(prediction.planting_season, None);
    }

    #[test]
    fn dual_prediction_includes_planting_season() {
        let service =
            PredictionService::new(test_artifacts(), PredictionOutputs::PlantingAndHarvest);
        let prediction = service.predict(&humid_rice()).unwrap();
        assert_eq!(prediction.harvest_season, "Kharif");
        assert_eq!(prediction.planting_season, Some("Monsoon".to_string()));
    }

    #[test]
    fn dry_observation_takes_other_branch() {
        let service = PredictionService::new(test_artifacts(), PredictionOutputs::Harvest);
        let mut observation = humid_rice();
        observation.humidity = 40.0;
        let prediction = service.predict(&observation).unwrap();
        assert_eq!(prediction.harvest_season, "Rabi");
    }

    #[test]
    fn unknown_crop_label_is_reported() {
        let service = PredictionService::new(test_artifacts(), PredictionOutputs::Harvest);
        let mut observation = humid_rice();
        observation.label = "durian".to_string();
        let err = service.predict(&observation).unwrap_err();
        assert!(matches!(
            err,
            AppError::Inference(InferenceError::UnknownCategory { feature: "label", .. })
        ));
    }

    #[test]
    fn unknown_country_is_reported() {
        let service = PredictionService::new(test_artifacts(), PredictionOutputs::Harvest);
        let mut observation = humid_rice();
        observation.country = "Atlantis".to_string();
        assert!(service.predict(&observation).is_err());
    }

    #[test]
    fn harvest_only_response_body_shape() {
        let prediction = SeasonPrediction {
            label: "rice".to_string(),
            harvest_season: "Kharif".to_string(),
            planting_season: None,
        };
        let body = prediction.into_response_body();
        assert_eq!(body["Best_Harvest_Season"], "Kharif");
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[test]
    fn dual_response_body_interpolates_label() {
        let prediction = SeasonPrediction {
            label: "rice".to_string(),
            harvest_season: "Kharif".to_string(),
            planting_season: Some("Monsoon".to_string()),
        };
        let body = prediction.into_response_body();
        assert_eq!(
            body["The predicted best season to plant rice based on the information provided is"],
            "Monsoon"
        );
        assert_eq!(
            body["The predicted best harvest season of rice that will result in optimum yield is"],
            "Kharif"
        );
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
