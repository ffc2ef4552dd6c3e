use num_traits::Float;

use crate::ops::Op;
use crate::value::Value;

/// Applies the hyperbolic tangent to a scalar node, producing a fresh node
/// with `data = tanh(a)` in `(-1, 1)` that records its single operand.
///
/// The derivative, `1 - tanh(a)^2`, is expressed through the output value
/// itself during the backward pass, so no extra state is recorded here.
pub fn tanh_op<T: Float>(a: &Value<T>) -> Value<T> {
    Value::from_op(a.data().tanh(), Op::Tanh, a.clone(), None)
}

impl<T: Float> Value<T> {
    /// Method form of [`tanh_op`].
    pub fn tanh(&self) -> Value<T> {
        tanh_op(self)
    }
}
