// microrust-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::types::ValueOp;
use crate::value::Value;
use std::ops::Mul;
use std::rc::Rc;

// --- Forward Operation ---

/// Multiplies two graph values, returning a new node with the product-rule
/// backward.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let grad_fn = MulBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(a.data() * b.data(), ValueOp::Mul, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Product rule: each operand receives the output gradient scaled by the
/// *other* operand's forward value.
#[derive(Debug)]
struct MulBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![
            self.rhs.data() * grad_output,
            self.lhs.data() * grad_output,
        ]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator impls ---

impl Mul<&Value> for &Value {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul<Value> for Value {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul_op(&self, &rhs)
    }
}

impl Mul<&Value> for Value {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul_op(&self, rhs)
    }
}

impl Mul<Value> for &Value {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul_op(self, &rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        mul_op(self, &Value::new(rhs))
    }
}

impl Mul<f64> for Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        mul_op(&self, &Value::new(rhs))
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul_op(&Value::new(self), rhs)
    }
}

impl Mul<Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul_op(&Value::new(self), &rhs)
    }
}

// --- Tests ---
