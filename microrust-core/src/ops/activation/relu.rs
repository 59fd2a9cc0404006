// microrust-core/src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::types::ValueOp;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Rectified Linear Unit: `relu(a) = max(0, a)`.
pub fn relu_op(a: &Value) -> Value {
    let data = if a.data() > 0.0 { a.data() } else { 0.0 };
    let grad_fn = ReluBackward { input: a.clone() };
    Value::from_op(data, ValueOp::Relu, Rc::new(grad_fn))
}

impl Value {
    /// Applies the Rectified Linear Unit activation to this value.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Backward Operation ---

/// Gate: the output gradient passes through where the activation was
/// positive and is blocked elsewhere (the subgradient at 0 is taken as 0).
#[derive(Debug)]
struct ReluBackward {
    input: Value,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let gate = if self.input.data() > 0.0 { 1.0 } else { 0.0 };
        vec![gate * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_relu_forward() {
        assert_relative_eq!(Value::new(-2.0).relu().data(), 0.0);
        assert_relative_eq!(Value::new(0.0).relu().data(), 0.0);
        assert_relative_eq!(Value::new(1.5).relu().data(), 1.5);
    }

    #[test]
    fn test_relu_blocks_gradient_when_inactive() {
        let a = Value::new(-5.0);
        let out = a.relu();
        assert_relative_eq!(out.data(), 0.0);
        out.backward();
        assert_relative_eq!(a.grad(), 0.0);
    }

    #[test]
    fn test_relu_passes_gradient_when_active() {
        let a = Value::new(5.0);
        let out = a.relu();
        assert_relative_eq!(out.data(), 5.0);
        out.backward();
        assert_relative_eq!(a.grad(), 1.0);
    }

    #[test]
    fn test_relu_within_a_chain() {
        // loss = relu(x * 2) at x = 3: gradient is the inner factor.
        let x = Value::new(3.0);
        let out = (&x * 2.0).relu();
        out.backward();
        assert_relative_eq!(x.grad(), 2.0);

        // Inactive side: everything is gated off.
        let y = Value::new(-3.0);
        let out = (&y * 2.0).relu();
        out.backward();
        assert_relative_eq!(y.grad(), 0.0);
    }

    #[test]
    fn test_relu_op_tag() {
        assert_eq!(Value::new(1.0).relu().op(), ValueOp::Relu);
    }
}
