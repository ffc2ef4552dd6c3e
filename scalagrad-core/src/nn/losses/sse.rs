use num_traits::Float;

use crate::error::ScalaGradError;
use crate::ops::{add_op, mul_op};
use crate::value::Value;

/// Builds the sum of squared residuals `sum((target - prediction)^2)` as a
/// graph rooted at the returned node.
///
/// Only the engine's `{add, mul}` constructors are used: the residual is
/// `target + prediction * -1` and the square is a self-multiplication.
/// Residuals are summed, not averaged, so the effective step size scales
/// with the number of examples folded into one loss root.
///
/// # Errors
/// Returns `ScalaGradError::InputWidthMismatch` when the slices differ in
/// length.
pub fn sum_squared_error<T: Float>(
    predictions: &[Value<T>],
    targets: &[Value<T>],
) -> Result<Value<T>, ScalaGradError> {
    if predictions.len() != targets.len() {
        return Err(ScalaGradError::InputWidthMismatch {
            expected: targets.len(),
            actual: predictions.len(),
        });
    }

    let neg_one = Value::new(-T::one());
    let mut total = Value::new(T::zero());
    for (prediction, target) in predictions.iter().zip(targets) {
        let residual = add_op(target, &mul_op(prediction, &neg_one));
        let squared = mul_op(&residual, &residual);
        total = add_op(&total, &squared);
    }
    Ok(total)
}
