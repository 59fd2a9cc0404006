use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
///
/// Forward passes are inherent methods on the concrete types, because their
/// signatures differ (a neuron produces one value, a layer produces many).
/// What every module shares is its parameter collection and the zero-grad
/// responsibility the engine delegates to consumers.
pub trait Module: std::fmt::Debug {
    /// Returns the flat, ordered sequence of every learnable parameter
    /// (weights and biases) of the module, including sub-modules.
    ///
    /// The returned handles share the underlying nodes, so gradient reads and
    /// data updates through them act on the module's own parameters.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all learnable parameters along with hierarchical dotted names
    /// (e.g. `"layers.0.neurons.1.weight.2"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to 0.
    ///
    /// Call between optimization steps: backward passes accumulate, they
    /// never reset.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}
