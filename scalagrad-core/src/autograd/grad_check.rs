use num_traits::Float;
use thiserror::Error;

use crate::autograd::graph::backward;
use crate::value::Value;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?} (difference: {difference:?})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64, // Reported as f64 for precision
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}: loss+ {loss_plus:?}, loss- {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Gradient check input must be a leaf node (no recorded operation). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must rebuild its expression graph from the given leaves on every
/// call; intermediate nodes are specific to one forward evaluation and cannot
/// be reused. The analytical gradient comes from one `backward` pass over the
/// graph built by `func`; the numerical estimate for input `i` is
/// `(f(x_i + eps) - f(x_i - eps)) / (2 * eps)` with all other inputs held
/// fixed. The comparison is relative, scaled by the larger magnitude of the
/// two gradients (floored at 1).
pub fn check_grad<T, F>(
    func: F,
    inputs: &[Value<T>],
    epsilon: T,
    tolerance: T,
) -> Result<(), GradCheckError>
where
    T: Float,
    F: Fn(&[Value<T>]) -> Value<T>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    let output = func(inputs);
    backward(&output);
    let analytical: Vec<T> = inputs.iter().map(|input| input.grad()).collect();

    for (i, input) in inputs.iter().enumerate() {
        let original = input.data();

        input.set_data(original + epsilon);
        let loss_plus = func(inputs).data();
        input.set_data(original - epsilon);
        let loss_minus = func(inputs).data();
        input.set_data(original);

        let numerical = (loss_plus - loss_minus) / (epsilon + epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus: as_f64(loss_plus),
                loss_minus: as_f64(loss_minus),
            });
        }

        let difference = (analytical[i] - numerical).abs();
        let scale = analytical[i].abs().max(numerical.abs()).max(T::one());
        if difference > tolerance * scale {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: as_f64(analytical[i]),
                numerical: as_f64(numerical),
                difference: as_f64(difference),
            });
        }
    }

    Ok(())
}

fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
