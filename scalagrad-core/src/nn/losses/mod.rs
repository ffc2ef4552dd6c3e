// Loss builders expressed through the engine's own op constructors, so the
// loss root differentiates like any other node.

pub mod sse;

pub use sse::sum_squared_error;
