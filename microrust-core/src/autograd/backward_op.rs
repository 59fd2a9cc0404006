use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Any operation that creates a non-leaf [`Value`] installs a `BackwardOp`
/// implementation in the output node's `grad_fn` field at construction time.
/// The backward-pass driver invokes it exactly once per pass, after every
/// consumer of the node has already contributed to the node's gradient.
///
/// Implementations hold strong `Value` clones of their operands. That is
/// deliberate: a node's lifetime must be at least as long as any node that
/// references it as an operand, and since operands are always constructed
/// before their consumers, these references cannot form cycles.
pub trait BackwardOp: Debug {
    /// Computes the gradient contributions for this operation's inputs, given
    /// the gradient of the operation's output (`grad_output = dL/dOutput`).
    ///
    /// Returns one contribution per input, in the same order as
    /// [`inputs`](BackwardOp::inputs). The driver adds each contribution into
    /// the matching operand's gradient; rules never write gradients
    /// themselves.
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// The operand nodes that participated in the forward operation, in the
    /// order matching [`backward`](BackwardOp::backward)'s contributions.
    fn inputs(&self) -> Vec<Value>;
}
