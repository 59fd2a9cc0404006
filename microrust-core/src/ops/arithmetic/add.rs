// microrust-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::types::ValueOp;
use crate::value::Value;
use std::ops::Add;
use std::rc::Rc;

// --- Forward Operation ---

/// Adds two graph values, returning a new node with the sum-rule backward.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let grad_fn = AddBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(a.data() + b.data(), ValueOp::Add, Rc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward rule for addition: the output gradient flows to both operands
/// unchanged.
#[derive(Debug)]
struct AddBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator impls ---

impl Add<&Value> for &Value {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add_op(self, rhs)
    }
}

impl Add<Value> for Value {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add_op(&self, &rhs)
    }
}

impl Add<&Value> for Value {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add_op(&self, rhs)
    }
}

impl Add<Value> for &Value {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add_op(self, &rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        add_op(self, &Value::new(rhs))
    }
}

impl Add<f64> for Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        add_op(&self, &Value::new(rhs))
    }
}

impl Add<&Value> for f64 {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add_op(&Value::new(self), rhs)
    }
}

impl Add<Value> for f64 {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add_op(&Value::new(self), &rhs)
    }
}

// --- Tests ---
