// microrust-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;
use std::ops::Sub;

// --- Forward Operation ---

/// Subtraction, expressed compositionally as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

// --- Operator impls ---

impl Sub<&Value> for &Value {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub<Value> for Value {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub_op(&self, &rhs)
    }
}

impl Sub<&Value> for Value {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub_op(&self, rhs)
    }
}

impl Sub<Value> for &Value {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub_op(self, &rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        sub_op(self, &Value::new(rhs))
    }
}

impl Sub<f64> for Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        sub_op(&self, &Value::new(rhs))
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub_op(&Value::new(self), rhs)
    }
}

impl Sub<Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub_op(&Value::new(self), &rhs)
    }
}

// --- Tests ---
