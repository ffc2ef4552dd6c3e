use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use num_traits::Float;

use crate::ops::Op;

/// Internal storage for a scalar graph node.
///
/// Holds the current value, the gradient accumulated by the most recent
/// backward pass, and the provenance record (operation tag plus operand
/// handles) that links the node into the computation graph.
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle to allow
/// shared ownership and interior mutability.
pub struct ValueData<T> {
    /// The node's current scalar value.
    pub(crate) data: T,
    /// Gradient of some downstream root with respect to this node.
    /// Only meaningful immediately after a backward pass rooted there.
    pub(crate) grad: T,
    /// Operation that produced this node. `None` marks a leaf.
    pub(crate) op: Option<Op>,
    /// First operand. Always present for non-leaf nodes.
    pub(crate) first: Option<Value<T>>,
    /// Second operand. Present for `Add`/`Mul`, absent for `Tanh`.
    pub(crate) second: Option<Value<T>>,
}

/// A scalar node in the autodiff computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1. **Shared ownership:** a leaf such as a weight is an operand of many
///    result nodes; cloning a `Value` clones the handle, not the cell.
///    Dropping a result therefore never frees operands that are still
///    referenced elsewhere.
/// 2. **Interior mutability:** the backward pass accumulates into `grad` and
///    the update step nudges `data` through shared immutable handles.
///
/// The graph is single-threaded by design; see the crate docs on concurrency.
pub struct Value<T> {
    pub(crate) inner: Rc<RefCell<ValueData<T>>>,
}

impl<T: Float> Value<T> {
    /// Creates a leaf node with the given value and a zero gradient.
    pub fn new(data: T) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData {
                data,
                grad: T::zero(),
                op: None,
                first: None,
                second: None,
            })),
        }
    }

    /// Creates a result node recording its operation and operands.
    ///
    /// Arity is the caller's responsibility: the typed constructors in
    /// `ops` are the only callers and pass the right operand count for `op`.
    pub(crate) fn from_op(data: T, op: Op, first: Value<T>, second: Option<Value<T>>) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData {
                data,
                grad: T::zero(),
                op: Some(op),
                first: Some(first),
                second,
            })),
        }
    }

    /// Returns the node's current scalar value.
    pub fn data(&self) -> T {
        self.inner.borrow().data
    }

    /// Returns the gradient accumulated by the most recent backward pass.
    pub fn grad(&self) -> T {
        self.inner.borrow().grad
    }

    /// Returns the operation that produced this node, or `None` for a leaf.
    pub fn op(&self) -> Option<Op> {
        self.inner.borrow().op
    }

    /// True if this node was created directly rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.inner.borrow().op.is_none()
    }

    /// Overwrites the node's value in place.
    pub fn set_data(&self, data: T) {
        self.inner.borrow_mut().data = data;
    }

    /// Subtracts `delta` from the node's value in place.
    pub(crate) fn sub_data(&self, delta: T) {
        let mut guard = self.inner.borrow_mut();
        guard.data = guard.data - delta;
    }

    pub(crate) fn set_grad(&self, grad: T) {
        self.inner.borrow_mut().grad = grad;
    }

    pub(crate) fn add_grad(&self, contribution: T) {
        let mut guard = self.inner.borrow_mut();
        guard.grad = guard.grad + contribution;
    }

    /// First operand handle, if any.
    pub fn first(&self) -> Option<Value<T>> {
        self.inner.borrow().first.clone()
    }

    /// Second operand handle, if any.
    pub fn second(&self) -> Option<Value<T>> {
        self.inner.borrow().second.clone()
    }

    /// Stable identity of the underlying cell, used as a graph-node key
    /// during traversal.
    pub(crate) fn as_ptr(&self) -> *const RefCell<ValueData<T>> {
        Rc::as_ptr(&self.inner)
    }
}

// Cloning a Value clones the Rc handle, not the underlying cell.
impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Value {
            inner: Rc::clone(&self.inner),
        }
    }
}

// Identity is pointer identity: two handles are equal iff they refer to the
// same graph cell, never by comparing the stored numbers.
impl<T> PartialEq for Value<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for Value<T> {}

impl<T> Hash for Value<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.inner).hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.borrow();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .finish()
    }
}
