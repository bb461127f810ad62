//! Categorical label encoding

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// A fitted category-to-code mapping.
///
/// `classes` is the vocabulary in fitted order: the code of a category
/// is its position in the vector, and decoding a class code is a plain
/// index. The vocabulary is small (crops, countries, seasons), so
/// encoding scans it linearly rather than carrying a redundant index
/// structure through serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Encode a category string to its fitted integer code.
    pub fn transform(&self, feature: &'static str, value: &str) -> Result<usize, InferenceError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .ok_or_else(|| InferenceError::UnknownCategory {
                feature,
                value: value.to_string(),
            })
    }

    /// Decode a class code back to its category string.
    pub fn inverse_transform(&self, code: usize) -> Result<&str, InferenceError> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or(InferenceError::UnknownClassCode(code))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
