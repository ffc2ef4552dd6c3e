// Foundational arithmetic operations on scalar nodes
pub mod add;
pub mod mul;

// Re-export the primary operation functions
pub use add::add_op;
pub use mul::mul_op;

#[cfg(test)]
mod mul_test;
