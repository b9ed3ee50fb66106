//! Indexing models that map a scalar coordinate to a predicted bucket index.
//!
//! The table never inspects model internals; it consumes [`Model::predict`]
//! plus the `[min, max]` prediction window derived once at construction.
//! [`LinearModel`] is the default implementation, a least-squares fit over
//! the training sample.

use crate::error::{GeodexError, Result};

/// A trained scalar-to-scalar function used for bucket placement.
pub trait Model {
    /// Predict the index for a single coordinate value.
    fn predict(&self, x: f64) -> f64;

    /// Predict indices for a batch of coordinate values.
    fn predict_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}

/// Simple linear regression: `index = slope * x + intercept`.
///
/// Immutable after [`fit`](LinearModel::fit). For coordinate data that is
/// roughly linearly distributed along the trained axis, rounded predictions
/// give near-contiguous bucket assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    slope: f64,
    intercept: f64,
}

impl LinearModel {
    /// Fit the model to a training sample by ordinary least squares.
    ///
    /// `inputs` are coordinate values on the table's axis, `targets` the
    /// desired indices. A sample whose inputs are all identical degrades to
    /// a flat model predicting the target mean.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the sample is empty, the slices differ in
    /// length, or any value is non-finite.
    pub fn fit(inputs: &[f64], targets: &[f64]) -> Result<Self> {
        if inputs.is_empty() {
            return Err(GeodexError::InvalidInput(
                "training sample is empty".to_string(),
            ));
        }
        if inputs.len() != targets.len() {
            return Err(GeodexError::InvalidInput(format!(
                "training sample length mismatch: {} inputs vs {} targets",
                inputs.len(),
                targets.len()
            )));
        }
        if inputs.iter().chain(targets).any(|v| !v.is_finite()) {
            return Err(GeodexError::InvalidInput(
                "training sample contains non-finite values".to_string(),
            ));
        }

        let n = inputs.len() as f64;
        let sum_x: f64 = inputs.iter().sum();
        let sum_y: f64 = targets.iter().sum();
        let sum_xy: f64 = inputs.iter().zip(targets).map(|(x, y)| x * y).sum();
        let sum_xx: f64 = inputs.iter().map(|x| x * x).sum();

        let denominator = n * sum_xx - sum_x * sum_x;
        // Degenerate sample: all inputs identical, flat model at the target mean.
        let (slope, intercept) = if denominator == 0.0 {
            (0.0, sum_y / n)
        } else {
            let slope = (n * sum_xy - sum_x * sum_y) / denominator;
            (slope, (sum_y - slope * sum_x) / n)
        };

        log::debug!(
            "trained linear model: slope={slope}, intercept={intercept}, sample={} values",
            inputs.len()
        );

        Ok(Self { slope, intercept })
    }

    /// Construct from known coefficients without training.
    pub fn from_coefficients(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// The fitted slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// The fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Model for LinearModel {
    #[inline]
    fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
