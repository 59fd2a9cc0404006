use crate::error::MicroRustError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: a sequential composition of fully connected
/// layers. Every layer applies relu except the last, which stays linear.
#[derive(Debug)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Creates an MLP taking `n_inputs` values, with one layer per entry of
    /// `layer_sizes`.
    ///
    /// `MLP::new(3, &[4, 4, 1], rng)` builds `3 -> 4 -> 4 -> 1` with relu on
    /// the two hidden layers and a linear output layer.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, layer_sizes: &[usize], rng: &mut R) -> Self {
        let mut sizes = vec![n_inputs];
        sizes.extend_from_slice(layer_sizes);

        let layers = (0..layer_sizes.len())
            .map(|i| {
                let nonlinear = i != layer_sizes.len() - 1;
                Layer::new(sizes[i], sizes[i + 1], nonlinear, rng)
            })
            .collect();
        MLP { layers }
    }

    /// Runs the input vector through every layer in order.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError> {
        let mut current: Vec<Value> = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }
}

impl Module for MLP {
    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, value)| (format!("layers.{}.{}", i, name), value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mlp_shapes_and_parameter_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let mlp = MLP::new(3, &[4, 4, 1], &mut rng);

        // 4*(3+1) + 4*(4+1) + 1*(4+1)
        assert_eq!(mlp.parameters().len(), 41);

        let inputs = vec![Value::new(2.0), Value::new(3.0), Value::new(-1.0)];
        let outputs = mlp.forward(&inputs).unwrap();
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].data().is_finite());
    }

    #[test]
    fn test_mlp_backward_and_zero_grad() {
        let mut rng = StdRng::seed_from_u64(1);
        let mlp = MLP::new(2, &[3, 1], &mut rng);

        let inputs = vec![Value::new(0.5), Value::new(-0.5)];
        let outputs = mlp.forward(&inputs).unwrap();
        outputs[0].backward();

        // At least the output layer's bias always receives gradient.
        let got_any_grad = mlp.parameters().iter().any(|p| p.grad() != 0.0);
        assert!(got_any_grad);

        mlp.zero_grad();
        for p in mlp.parameters() {
            assert_relative_eq!(p.grad(), 0.0);
        }
    }

    #[test]
    fn test_mlp_rejects_wrong_input_arity() {
        let mut rng = StdRng::seed_from_u64(2);
        let mlp = MLP::new(3, &[2, 1], &mut rng);
        assert!(mlp.forward(&[Value::new(1.0)]).is_err());
    }
}
