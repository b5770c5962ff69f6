//! Contains datastructures and utility functions
//! shared by the `vm` and its callers.
//!
//! - Opcodes and parameter modes.
//! - Program text representation, loading, and span annotations.

pub mod mode;
pub mod opcode;
pub mod program;
pub mod source;
pub mod span;
pub mod syntax;

pub use mode::Mode;
pub use opcode::Opcode;
pub use program::Program;
pub use source::Source;
pub use span::Span;
pub use syntax::{Note, Syntax};
