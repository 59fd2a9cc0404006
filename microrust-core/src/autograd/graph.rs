use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable node identity: the address of the shared `RefCell` behind a handle.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Topologically orders the graph reachable from `root`: every node appears
/// exactly once, after all of its operands.
///
/// DFS postorder with a visited set keyed on node identity. The de-duplication
/// is what makes diamond-shaped dependencies work: a node shared by several
/// consumers is recorded once, so its backward rule fires once, after all
/// consumers have contributed to its gradient.
///
/// Graphs built through the operation builders are acyclic (operands always
/// pre-date their consumers). A manually aliased cyclic graph would overflow
/// the stack here; the engine does not guard against that.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<Value> = Vec::new();
    visit(root, &mut visited, &mut order);
    order
}

fn visit(node: &Value, visited: &mut HashSet<NodeId>, order: &mut Vec<Value>) {
    if !visited.insert(node.node_id()) {
        return;
    }
    if let Some(grad_fn) = node.grad_fn() {
        for input in grad_fn.inputs() {
            visit(&input, visited, order);
        }
    }
    order.push(node.clone());
}
