use scalagrad_core::Value;

/// The fixed four-example dataset used by the training tests: three input
/// features and one target per example.
pub const DATASET: [([f64; 3], f64); 4] = [
    ([2.0, 3.0, -1.0], 1.0),
    ([3.0, -1.0, 0.5], -1.0),
    ([0.5, 1.0, 1.0], -1.0),
    ([1.0, 1.0, -1.0], 1.0),
];

pub fn leaves(data: &[f64]) -> Vec<Value<f64>> {
    data.iter().copied().map(Value::new).collect()
}
