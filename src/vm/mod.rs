//! This module contains the core VM implementation.
//! A `VM` is driven by its caller through `VM::resume`,
//! stopping on every input request, every output, and on halting.

pub mod event;
pub mod memory;
pub mod trace;
pub mod vm;

pub use event::{Event, State};
pub use memory::Memory;
pub use trace::{Kind, Trace};
pub use vm::VM;
