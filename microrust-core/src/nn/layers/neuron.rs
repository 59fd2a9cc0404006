use crate::error::MicroRustError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single neuron: a weighted sum of its inputs plus a bias, optionally
/// followed by relu.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights drawn from `U(-1, 1)` and a
    /// zero bias.
    ///
    /// # Arguments
    ///
    /// * `n_inputs` - Number of input values the neuron accepts.
    /// * `nonlinear` - If `true`, the output passes through relu.
    /// * `rng` - Source of randomness for the weight draw; seed it for
    ///   reproducible models.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, nonlinear: bool, rng: &mut R) -> Self {
        let weights = (0..n_inputs)
            .map(|_| init::uniform(rng, -1.0, 1.0))
            .collect();
        Neuron {
            weights,
            bias: Value::new(0.0),
            nonlinear,
        }
    }

    /// Number of inputs this neuron accepts.
    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Computes `relu(w . x + b)` (or just `w . x + b` for a linear neuron).
    ///
    /// # Errors
    ///
    /// Returns [`MicroRustError::DimensionMismatch`] when the input arity
    /// does not match the weight count.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, MicroRustError> {
        if inputs.len() != self.weights.len() {
            return Err(MicroRustError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let mut activation = self.bias.clone();
        for (weight, input) in self.weights.iter().zip(inputs) {
            activation = &activation + &(weight * input);
        }
        Ok(if self.nonlinear {
            activation.relu()
        } else {
            activation
        })
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        params.push(("bias".to_string(), self.bias.clone()));
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests; // Link to the test file
