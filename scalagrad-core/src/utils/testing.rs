use approx::relative_eq;

use crate::value::Value;

/// Checks that a node's value is within `tolerance` of `expected`
/// (absolute and relative). Panics with both numbers on mismatch.
pub fn check_value_near(actual: &Value<f64>, expected: f64, tolerance: f64) {
    let data = actual.data();
    if !relative_eq!(data, expected, epsilon = tolerance, max_relative = tolerance) {
        panic!(
            "value mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            data, expected, tolerance
        );
    }
}

/// Checks that a node's gradient is within `tolerance` of `expected`.
/// Panics with both numbers on mismatch.
pub fn check_grad_near(actual: &Value<f64>, expected: f64, tolerance: f64) {
    let grad = actual.grad();
    if !relative_eq!(grad, expected, epsilon = tolerance, max_relative = tolerance) {
        panic!(
            "gradient mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            grad, expected, tolerance
        );
    }
}
