// src/value/traits.rs

use crate::value::Value;
use std::iter::Sum;
use std::rc::Rc;

// Manual implementation: cloning a handle shares the node, it does not copy it.
impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::new(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::new(value)
    }
}

impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| &acc + &v)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| &acc + v)
    }
}
