// Core modules of the crate
pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;

// Re-export the scalar node type so it is reachable as `scalagrad_core::Value`
pub use value::Value;

pub use error::ScalaGradError;

// Re-export traits required by public functions/structs
pub use num_traits;
