//! Weight type definitions.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Portfolio weights, positionally aligned with the ticker list.
///
/// Weights are taken as given: they are never normalized and their sum is
/// not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Create a weight vector.
    #[must_use]
    pub const fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Get the weights as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Get the weights as an ndarray.
    #[must_use]
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_vec(self.0.clone())
    }

    /// Sum of all weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Number of weights.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_not_normalized() {
        let weights = WeightVector::new(vec![1.0, 2.0, 3.0]);
        assert!((weights.sum() - 6.0).abs() < 1e-12);
        assert_eq!(weights.to_array().len(), 3);
    }
}
