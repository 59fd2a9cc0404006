use crate::error::MicroRustError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: an ordered set of neurons sharing the same input
/// vector.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `n_outputs` neurons, each accepting `n_inputs`
    /// values.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, nonlinear, rng))
            .collect();
        Layer { neurons }
    }

    /// Number of outputs (neurons) of this layer.
    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    /// Feeds the same input vector to every neuron, in order.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, value)| (format!("neurons.{}.{}", i, name), value))
            })
            .collect()
    }
}
