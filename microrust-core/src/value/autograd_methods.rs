use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns a clone of the `Rc` pointing to this node's backward rule.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.borrow_data().grad_fn.clone()
    }

    /// Accumulates the given contribution into this node's gradient.
    ///
    /// Always `+=`, never overwrite: a node may receive contributions from
    /// every downstream consumer that used it as an operand.
    pub fn acc_grad(&self, contribution: f64) {
        self.borrow_data_mut().grad += contribution;
    }

    /// Resets the gradient to 0.
    ///
    /// The engine never does this on its own; zeroing between independent
    /// backward passes is the caller's responsibility.
    pub fn zero_grad(&self) {
        self.borrow_data_mut().grad = 0.0;
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Computes `d(self)/d(node)` into the `grad` field of every node
    /// reachable from `self`:
    ///
    /// 1. topologically order the reachable graph (operands before
    ///    consumers, de-duplicated by node identity),
    /// 2. seed this node's gradient with 1.0 (overwriting any prior value),
    /// 3. walk the order in reverse, letting each node's backward rule add
    ///    its contributions into its operands' gradients.
    ///
    /// The reverse walk guarantees that a node distributes its gradient only
    /// after every consumer has contributed to it, so the chain rule's
    /// sum-over-paths is complete when the rule fires.
    ///
    /// Repeated passes over the same graph re-accumulate on top of whatever
    /// gradients are present (only the root is reseeded). Call
    /// [`zero_grad`](Value::zero_grad) on the nodes of interest first if
    /// that is not what you want.
    pub fn backward(&self) {
        let order = topological_sort(self);
        log::debug!(
            "backward: {} nodes reachable from root (data={})",
            order.len(),
            self.data()
        );

        // Seed: d(root)/d(root) = 1.
        self.borrow_data_mut().grad = 1.0;

        for node in order.iter().rev() {
            if let Some(grad_fn) = node.grad_fn() {
                let grad_output = node.grad();
                let contributions = grad_fn.backward(grad_output);
                let inputs = grad_fn.inputs();
                debug_assert_eq!(
                    contributions.len(),
                    inputs.len(),
                    "backward rule returned {} contributions for {} inputs",
                    contributions.len(),
                    inputs.len()
                );
                for (input, contribution) in inputs.iter().zip(contributions) {
                    input.acc_grad(contribution);
                }
            }
        }
    }
}
