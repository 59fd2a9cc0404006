use std::fmt;

/// Identifies the operation that produced a [`Value`](crate::value::Value) node.
///
/// This tag is debug/trace metadata only: the backward pass dispatches through
/// the node's stored backward rule, never through this enum. Derived
/// operations (negate, subtract, divide, and the reversed literal forms) are
/// compositions of the primitives, so their nodes carry the tags of the
/// primitive operations they expand into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueOp {
    /// A leaf node wrapping a raw number (input, parameter, or constant).
    Leaf,
    Add,
    Mul,
    /// Power with a fixed numeric exponent.
    Pow(f64),
    Relu,
}

impl fmt::Display for ValueOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueOp::Leaf => write!(f, "leaf"),
            ValueOp::Add => write!(f, "+"),
            ValueOp::Mul => write!(f, "*"),
            ValueOp::Pow(exponent) => write!(f, "**{}", exponent),
            ValueOp::Relu => write!(f, "ReLU"),
        }
    }
}
