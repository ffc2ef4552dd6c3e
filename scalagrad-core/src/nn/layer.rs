use num_traits::Float;
use rand::Rng;
use rand_distr::uniform::SampleUniform;

use crate::error::ScalaGradError;
use crate::nn::neuron::Neuron;
use crate::value::Value;

/// A fixed-size collection of neurons sharing the same input vector.
#[derive(Debug)]
pub struct Layer<T> {
    num_inputs: usize,
    neurons: Vec<Neuron<T>>,
}

impl<T: Float> Layer<T> {
    /// Creates a layer of `num_neurons` neurons, each accepting `num_inputs`
    /// inputs.
    pub fn new<R>(num_inputs: usize, num_neurons: usize, rng: &mut R) -> Self
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        let neurons = (0..num_neurons).map(|_| Neuron::new(num_inputs, rng)).collect();
        Layer { num_inputs, neurons }
    }

    /// Applies every neuron to the shared input vector, producing one output
    /// node per neuron in neuron order.
    pub fn forward(&self, inputs: &[Value<T>]) -> Result<Vec<Value<T>>, ScalaGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    /// Input width shared by every neuron in the layer.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Output width, equal to the neuron count.
    pub fn num_outputs(&self) -> usize {
        self.neurons.len()
    }

    /// The layer's neurons, in output order.
    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }

    /// All trainable leaves of the layer, neuron by neuron.
    pub fn parameters(&self) -> Vec<Value<T>> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}
