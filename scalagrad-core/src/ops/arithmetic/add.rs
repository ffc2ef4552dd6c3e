use std::ops::Add;

use num_traits::Float;

use crate::ops::Op;
use crate::value::Value;

/// Adds two scalar nodes, producing a fresh node with `data = a + b` that
/// records both operands for the backward pass.
///
/// The operands may be the same node; the gradient contributions accumulate.
pub fn add_op<T: Float>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    Value::from_op(a.data() + b.data(), Op::Add, a.clone(), Some(b.clone()))
}

impl<T: Float> Add for &Value<T> {
    type Output = Value<T>;

    fn add(self, rhs: Self) -> Value<T> {
        add_op(self, rhs)
    }
}
