// Neural-network composition over the scalar autodiff engine:
// parameter initialization, neurons, layers, networks, and loss builders.

pub mod init;
pub mod layer;
pub mod losses;
pub mod network;
pub mod neuron;

// Re-export common items
pub use layer::Layer;
pub use losses::sum_squared_error;
pub use network::Network;
pub use neuron::Neuron;

// Declare test modules conditionally
#[cfg(test)]
mod layer_test;
#[cfg(test)]
mod network_test;
