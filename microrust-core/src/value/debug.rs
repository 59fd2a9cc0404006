// src/value/debug.rs

use crate::types::ValueOp;
use crate::value::Value;
use std::fmt;

// Shallow on purpose: printing a node must not walk the whole graph.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.borrow_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.borrow_data();
        if guard.op == ValueOp::Leaf {
            write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
        } else {
            write!(
                f,
                "Value(data={}, grad={}) <- {}",
                guard.data, guard.grad, guard.op
            )
        }
    }
}
