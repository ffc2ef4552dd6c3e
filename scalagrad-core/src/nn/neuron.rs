use num_traits::Float;
use rand::Rng;
use rand_distr::uniform::SampleUniform;

use crate::error::ScalaGradError;
use crate::nn::init::uniform_symmetric;
use crate::ops::{add_op, mul_op, tanh_op};
use crate::value::Value;

/// A single computational unit: one weight per input plus a bias, combined as
/// `tanh(bias + sum(inputs[i] * weights[i]))`.
#[derive(Debug)]
pub struct Neuron<T> {
    weights: Vec<Value<T>>,
    bias: Value<T>,
}

impl<T: Float> Neuron<T> {
    /// Creates a neuron for `num_inputs` inputs, with weights and bias
    /// independently drawn from `(-1, 1)`.
    pub fn new<R>(num_inputs: usize, rng: &mut R) -> Self
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        let weights = (0..num_inputs).map(|_| uniform_symmetric(rng)).collect();
        let bias = uniform_symmetric(rng);
        Neuron { weights, bias }
    }

    /// Computes the neuron's activation for one input vector, building a
    /// fresh chain of intermediate nodes through the op constructors.
    ///
    /// # Errors
    /// Returns `ScalaGradError::InputWidthMismatch` when `inputs` does not
    /// match the neuron's configured width.
    pub fn forward(&self, inputs: &[Value<T>]) -> Result<Value<T>, ScalaGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalaGradError::InputWidthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let mut activation = self.bias.clone();
        for (weight, input) in self.weights.iter().zip(inputs) {
            activation = add_op(&activation, &mul_op(weight, input));
        }
        Ok(tanh_op(&activation))
    }

    /// Number of inputs this neuron accepts.
    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    /// The per-input weight leaves, in input order.
    pub fn weights(&self) -> &[Value<T>] {
        &self.weights
    }

    /// The bias leaf.
    pub fn bias(&self) -> &Value<T> {
        &self.bias
    }

    /// All trainable leaves of this neuron: the bias followed by the weights.
    pub fn parameters(&self) -> Vec<Value<T>> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.push(self.bias.clone());
        params.extend(self.weights.iter().cloned());
        params
    }
}
