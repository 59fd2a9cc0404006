// microrust-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::MicroRustError;
use crate::types::ValueOp;
use crate::value::Value;
use std::rc::Rc;

// --- Forward Operation ---

/// Raises `base` to a fixed numeric exponent.
///
/// The exponent is a plain literal, not a graph node: it is captured by the
/// backward rule as a constant and receives no gradient. This is the only
/// power the engine supports; see [`pow_value_op`] for the checked
/// node-valued boundary.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let grad_fn = PowBackward {
        base: base.clone(),
        exponent,
    };
    Value::from_op(
        base.data().powf(exponent),
        ValueOp::Pow(exponent),
        Rc::new(grad_fn),
    )
}

/// Raises `base` to a `Value` exponent, which must be a plain wrapped
/// constant.
///
/// The engine does not differentiate through exponents. A leaf exponent is
/// accepted and treated exactly like a literal (no gradient flows into it);
/// anything produced by an operation is rejected with
/// [`MicroRustError::UnsupportedExponentType`].
pub fn pow_value_op(base: &Value, exponent: &Value) -> Result<Value, MicroRustError> {
    if !exponent.is_leaf() {
        return Err(MicroRustError::UnsupportedExponentType { op: exponent.op() });
    }
    Ok(pow_op(base, exponent.data()))
}

// --- Backward Operation ---

/// Power rule: d(base^n)/d(base) = n * base^(n-1).
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let n = self.exponent;
        vec![n * self.base.data().powf(n - 1.0) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Value methods ---

impl Value {
    /// Raises this value to a fixed numeric exponent.
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// Raises this value to a `Value` exponent; fails unless the exponent is
    /// a plain wrapped constant. See [`pow_value_op`].
    pub fn pow(&self, exponent: &Value) -> Result<Value, MicroRustError> {
        pow_value_op(self, exponent)
    }
}

// --- Tests ---
