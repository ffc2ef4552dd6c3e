//! Forward operation constructors for the scalar computation graph.
//!
//! Each operation builds a fresh result node recording its operands, so the
//! backward pass can replay the chain rule over the recorded provenance.

pub mod activation;
pub mod arithmetic;

// Re-export the primary operation functions
pub use activation::tanh_op;
pub use arithmetic::{add_op, mul_op};

use std::fmt;

use num_traits::Float;

use crate::error::ScalaGradError;
use crate::value::Value;

/// Tag identifying the operation that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Mul,
    Tanh,
}

impl Op {
    /// Number of operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Add | Op::Mul => 2,
            Op::Tanh => 1,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => write!(f, "add"),
            Op::Mul => write!(f, "mul"),
            Op::Tanh => write!(f, "tanh"),
        }
    }
}

/// Applies `op` to the given operands, building a new graph node.
///
/// Dynamic-dispatch entry point for driver code that selects operations at
/// runtime (loss construction, custom forward math). Code with the operation
/// fixed at compile time should call `add_op`/`mul_op`/`tanh_op` directly,
/// which cannot fail.
///
/// Returns `ScalaGradError::OperandArityMismatch` when the operand count does
/// not match `op.arity()`, instead of reaching an unreachable dispatch arm.
pub fn apply<T: Float>(
    op: Op,
    a: &Value<T>,
    b: Option<&Value<T>>,
) -> Result<Value<T>, ScalaGradError> {
    match (op, b) {
        (Op::Add, Some(b)) => Ok(add_op(a, b)),
        (Op::Mul, Some(b)) => Ok(mul_op(a, b)),
        (Op::Tanh, None) => Ok(tanh_op(a)),
        (op, b) => Err(ScalaGradError::OperandArityMismatch {
            operation: op.to_string(),
            expected: op.arity(),
            actual: 1 + usize::from(b.is_some()),
        }),
    }
}
