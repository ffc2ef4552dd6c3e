use std::cell::RefCell;
use std::collections::HashSet;

use num_traits::Float;

use crate::ops::Op;
use crate::value::{Value, ValueData};

/// Recursively builds a topological sort of the computation graph.
///
/// Post-order depth-first over the operand edges, visiting each cell at most
/// once (keyed by pointer identity): a node is pushed only after everything
/// it depends on. Iterating the result in reverse therefore processes every
/// consumer before any of its operands, which is what gradient accumulation
/// requires on DAGs with shared subexpressions, not just on trees.
pub(crate) fn build_topo<T: Float>(
    node: &Value<T>,
    visited: &mut HashSet<*const RefCell<ValueData<T>>>,
    sorted_list: &mut Vec<Value<T>>,
) {
    if !visited.insert(node.as_ptr()) {
        return;
    }
    if let Some(first) = node.first() {
        build_topo(&first, visited, sorted_list);
    }
    if let Some(second) = node.second() {
        build_topo(&second, visited, sorted_list);
    }
    sorted_list.push(node.clone());
}

/// Collects every node reachable from `root` in topological order
/// (operands before consumers, `root` last).
pub(crate) fn topo_sort<T: Float>(root: &Value<T>) -> Vec<Value<T>> {
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(root, &mut visited, &mut sorted_list);
    sorted_list
}

/// Computes the gradient of `root` with respect to every reachable node,
/// storing it in each node's `grad` field.
///
/// Three phases over one fixed topological order:
/// 1. reset `grad` to zero on every reachable node (a prior backward pass may
///    have left stale gradients on shared leaves such as weights),
/// 2. seed `root.grad = 1`,
/// 3. walk the order in reverse, applying each operation's local derivative
///    rule and accumulating the contribution into its operands.
///
/// Driving propagation from the explicit reverse topological order rather
/// than recursive descent guarantees a node's gradient is fully accumulated
/// before any of its operands consume it, even when an internal node has
/// several consumers.
pub fn backward<T: Float>(root: &Value<T>) {
    let sorted_list = topo_sort(root);
    log::debug!(
        "backward: propagating through {} reachable node(s)",
        sorted_list.len()
    );

    for node in &sorted_list {
        node.set_grad(T::zero());
    }
    root.set_grad(T::one());

    for node in sorted_list.iter().rev() {
        propagate(node);
    }
}

/// Applies the local derivative rule of one node, adding its contribution
/// into each operand's gradient. Leaves propagate nothing.
fn propagate<T: Float>(node: &Value<T>) {
    let Some(op) = node.op() else {
        return;
    };
    let grad = node.grad();
    match (op, node.first(), node.second()) {
        (Op::Add, Some(a), Some(b)) => {
            a.add_grad(grad);
            b.add_grad(grad);
        }
        (Op::Mul, Some(a), Some(b)) => {
            // Read both values before accumulating: a and b may alias.
            let a_data = a.data();
            let b_data = b.data();
            a.add_grad(grad * b_data);
            b.add_grad(grad * a_data);
        }
        (Op::Tanh, Some(a), None) => {
            let out = node.data();
            a.add_grad((T::one() - out * out) * grad);
        }
        // Constructors enforce arity, so this arm is unreachable.
        (op, first, second) => unreachable!(
            "node with op {} has malformed operands (first: {}, second: {})",
            op,
            first.is_some(),
            second.is_some()
        ),
    }
}

/// Performs one gradient-descent step over the whole graph reachable from
/// `root`: every node's value becomes `data - step_size * grad`.
///
/// Each node is visited exactly once even when it is reachable along several
/// paths. Intermediate nodes are about to be discarded, so nudging them is
/// inert; the step only matters for persistent leaves such as weights and
/// biases. Call only right after a `backward` over the same root, while the
/// gradients are current.
pub fn update<T: Float>(root: &Value<T>, step_size: T) {
    let sorted_list = topo_sort(root);
    log::trace!("update: nudging {} node(s)", sorted_list.len());
    for node in &sorted_list {
        let delta = step_size * node.grad();
        node.sub_data(delta);
    }
}

impl<T: Float> Value<T> {
    /// Method form of [`backward`], rooted at this node.
    pub fn backward(&self) {
        backward(self);
    }

    /// Method form of [`update`], rooted at this node.
    pub fn update(&self, step_size: T) {
        update(self, step_size);
    }
}
