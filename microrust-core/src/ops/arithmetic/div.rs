// microrust-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::value::Value;
use std::ops::Div;

// --- Forward Operation ---

/// Division, expressed compositionally as `a * b^(-1)`.
///
/// Division by zero is not detected: the reciprocal follows IEEE-754 and
/// yields infinities or NaNs that propagate through the graph.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

// --- Operator impls ---

impl Div<&Value> for &Value {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div_op(self, rhs)
    }
}

impl Div<Value> for Value {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div_op(&self, &rhs)
    }
}

impl Div<&Value> for Value {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div_op(&self, rhs)
    }
}

impl Div<Value> for &Value {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div_op(self, &rhs)
    }
}

impl Div<f64> for &Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        div_op(self, &Value::new(rhs))
    }
}

impl Div<f64> for Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        div_op(&self, &Value::new(rhs))
    }
}

impl Div<&Value> for f64 {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div_op(&Value::new(self), rhs)
    }
}

impl Div<Value> for f64 {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div_op(&Value::new(self), &rhs)
    }
}

// --- Tests ---
