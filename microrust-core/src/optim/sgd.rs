use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports classical momentum: `v <- momentum * v + grad`,
/// `param <- param - lr * v`. With `momentum == 0` this reduces to plain
/// gradient descent.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    velocities: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a plain SGD optimizer over the given parameters.
    ///
    /// The handles share the model's parameter nodes (see
    /// [`Module::parameters`](crate::nn::Module::parameters)), so stepping
    /// updates the model in place.
    pub fn new(params: Vec<Value>, lr: f64) -> Self {
        Self::with_momentum(params, lr, 0.0)
    }

    /// Creates an SGD optimizer with classical momentum.
    pub fn with_momentum(params: Vec<Value>, lr: f64, momentum: f64) -> Self {
        let velocities = vec![0.0; params.len()];
        SgdOptimizer {
            params,
            lr,
            momentum,
            velocities,
        }
    }

    /// Current learning rate.
    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Adjusts the learning rate (e.g. for manual scheduling).
    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) {
        log::trace!(
            "sgd step: {} params, lr={}, momentum={}",
            self.params.len(),
            self.lr,
            self.momentum
        );
        for (param, velocity) in self.params.iter().zip(self.velocities.iter_mut()) {
            let mut update = param.grad();
            if self.momentum != 0.0 {
                *velocity = self.momentum * *velocity + update;
                update = *velocity;
            }
            param.set_data(param.data() - self.lr * update);
        }
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests; // Link to the test file
