// Saturating nonlinearities
pub mod tanh;

pub use tanh::tanh_op;
