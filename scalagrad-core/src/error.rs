use thiserror::Error;

/// Custom error type for the ScalaGrad engine.
///
/// Every variant is a contract violation: the engine itself has no expected,
/// recoverable runtime failures (it is deterministic arithmetic over an
/// in-memory graph), so these surface programmer errors at the API boundary
/// instead of silently producing wrong numbers.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalaGradError {
    #[error("Operand arity mismatch for operation {operation}: expected {expected} operand(s), got {actual}")]
    OperandArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Input width mismatch: expected {expected}, got {actual}")]
    InputWidthMismatch { expected: usize, actual: usize },

    #[error("Invalid architecture {widths:?}: at least two non-zero layer widths are required")]
    InvalidArchitecture { widths: Vec<usize> },
}
