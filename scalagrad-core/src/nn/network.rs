use num_traits::Float;
use rand::Rng;
use rand_distr::uniform::SampleUniform;

use crate::error::ScalaGradError;
use crate::nn::layer::Layer;
use crate::value::Value;

/// A feed-forward network: an ordered sequence of layers with matching
/// input/output widths.
#[derive(Debug)]
pub struct Network<T> {
    layers: Vec<Layer<T>>,
}

impl<T: Float> Network<T> {
    /// Builds a network from an architecture of layer widths `[w0, .., wk]`,
    /// producing `k` layers where layer `i` maps `w_i` inputs to `w_{i+1}`
    /// outputs.
    ///
    /// # Errors
    /// Returns `ScalaGradError::InvalidArchitecture` when fewer than two
    /// widths are given (no layer could be built) or any width is zero.
    pub fn new<R>(architecture: &[usize], rng: &mut R) -> Result<Self, ScalaGradError>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        if architecture.len() < 2 || architecture.contains(&0) {
            return Err(ScalaGradError::InvalidArchitecture {
                widths: architecture.to_vec(),
            });
        }

        let layers = architecture
            .windows(2)
            .map(|widths| Layer::new(widths[0], widths[1], rng))
            .collect();
        Ok(Network { layers })
    }

    /// Threads the input vector through every layer in order, returning the
    /// final layer's outputs.
    pub fn forward(&self, inputs: &[Value<T>]) -> Result<Vec<Value<T>>, ScalaGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    /// Input width of the first layer.
    pub fn num_inputs(&self) -> usize {
        self.layers[0].num_inputs()
    }

    /// Output width of the last layer.
    pub fn num_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].num_outputs()
    }

    /// The network's layers, in forward order.
    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    /// All trainable leaves of the network, layer by layer.
    pub fn parameters(&self) -> Vec<Value<T>> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}
