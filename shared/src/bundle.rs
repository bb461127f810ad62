//! Serialized model bundle schema
//!
//! The bundle is exported by the offline training job as a single JSON
//! document: the fitted classifier(s) plus the label encoders they were
//! fitted against. The planting-season model is optional; bundles
//! trained for harvest-only deployments omit it.

use serde::{Deserialize, Serialize};

use crate::encoder::LabelEncoder;
use crate::error::InferenceError;
use crate::tree::{DecisionTree, TreeNode};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelBundle {
    pub harvest_model: DecisionTree,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planting_model: Option<DecisionTree>,
    pub label_encoder: LabelEncoder,
    pub country_encoder: LabelEncoder,
    pub harvest_season_encoder: LabelEncoder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planting_season_encoder: Option<LabelEncoder>,
}

impl ModelBundle {
    /// Whether the bundle carries the planting-season model.
    pub fn has_planting_model(&self) -> bool {
        self.planting_model.is_some() && self.planting_season_encoder.is_some()
    }

    /// Structural coherence checks run once at load time.
    ///
    /// Every tree must be well formed for `n_features` inputs, every
    /// leaf must decode through the matching season encoder, and a
    /// planting model must come paired with its encoder.
    pub fn validate(&self, n_features: usize) -> Result<(), InferenceError> {
        self.harvest_model.validate(n_features)?;
        validate_leaf_classes(&self.harvest_model, &self.harvest_season_encoder)?;

        match (&self.planting_model, &self.planting_season_encoder) {
            (Some(model), Some(encoder)) => {
                model.validate(n_features)?;
                validate_leaf_classes(model, encoder)?;
            }
            (None, None) => {}
            (Some(_), None) | (None, Some(_)) => {
                return Err(InferenceError::UnpairedPlantingArtifacts)
            }
        }
        Ok(())
    }
}

fn validate_leaf_classes(
    tree: &DecisionTree,
    encoder: &LabelEncoder,
) -> Result<(), InferenceError> {
    for node in &tree.nodes {
        if let TreeNode::Leaf { class } = node {
            if *class >= encoder.len() {
                return Err(InferenceError::UnknownClassCode(*class));
            }
        }
    }
    Ok(())
}
