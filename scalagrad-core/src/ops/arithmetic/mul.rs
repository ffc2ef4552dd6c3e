use std::ops::Mul;

use num_traits::Float;

use crate::ops::Op;
use crate::value::Value;

/// Multiplies two scalar nodes, producing a fresh node with `data = a * b`
/// that records both operands for the backward pass.
///
/// Passing the same node twice squares it; the product rule then yields the
/// expected doubled gradient through accumulation.
pub fn mul_op<T: Float>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    Value::from_op(a.data() * b.data(), Op::Mul, a.clone(), Some(b.clone()))
}

impl<T: Float> Mul for &Value<T> {
    type Output = Value<T>;

    fn mul(self, rhs: Self) -> Value<T> {
        mul_op(self, rhs)
    }
}
