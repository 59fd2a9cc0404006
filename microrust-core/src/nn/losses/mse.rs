// microrust-core/src/nn/losses/mse.rs

use crate::error::MicroRustError;
use crate::value::Value;

/// Specifies the reduction to apply to the per-sample squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// Computes the Mean Squared Error (MSE) loss between predictions and
/// targets.
///
/// Predictions are graph values so the loss stays differentiable; targets are
/// plain numbers and are wrapped as fresh constant leaves.
#[derive(Debug, Clone)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    /// Builds the loss node for the given batch.
    ///
    /// # Errors
    ///
    /// Returns [`MicroRustError::DimensionMismatch`] when predictions and
    /// targets differ in length.
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[f64],
    ) -> Result<Value, MicroRustError> {
        if predictions.len() != targets.len() {
            return Err(MicroRustError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }

        let mut total = Value::new(0.0);
        for (prediction, &target) in predictions.iter().zip(targets) {
            let diff = prediction - target;
            total = &total + &diff.powf(2.0);
        }

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => &total / predictions.len() as f64,
        })
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests; // Link to the test file
