//! Decision tree classifier evaluation

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// One node of a fitted decision tree.
///
/// Trees are stored as a flat node array with index references, the
/// layout the offline exporter writes. Node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

/// A fitted decision tree mapping a scaled feature vector to a class code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree from the root and return the predicted class code.
    ///
    /// Values at or below a split threshold go left, matching the
    /// convention the tree was exported with.
    pub fn predict(&self, features: &[f64]) -> Result<usize, InferenceError> {
        let mut index = 0;
        // A well-formed tree reaches a leaf in at most `nodes.len()` hops;
        // the bound turns a cyclic artifact into an error instead of a hang.
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { class }) => return Ok(*class),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().ok_or(
                        InferenceError::FeatureLengthMismatch {
                            expected: *feature + 1,
                            actual: features.len(),
                        },
                    )?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => return Err(InferenceError::MalformedTree(index)),
            }
        }
        Err(InferenceError::MalformedTree(index))
    }

    /// Check that every split references in-bounds nodes and features.
    pub fn validate(&self, n_features: usize) -> Result<(), InferenceError> {
        if self.nodes.is_empty() {
            return Err(InferenceError::MalformedTree(0));
        }
        for node in &self.nodes {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *left >= self.nodes.len() || *right >= self.nodes.len() {
                    return Err(InferenceError::MalformedTree((*left).max(*right)));
                }
                if *feature >= n_features {
                    return Err(InferenceError::FeatureLengthMismatch {
                        expected: *feature + 1,
                        actual: n_features,
                    });
                }
            }
        }
        Ok(())
    }
}
