/// Where a machine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Built, never resumed.
    Ready,
    /// Started, and not blocked on input.
    /// A machine paused after an output, or after a fault, is `Running`.
    Running,
    /// Suspended inside an input instruction,
    /// waiting for exactly one value.
    AwaitingInput,
    /// Reached a halt instruction. Terminal.
    Halted,
}

/// What a call to `VM::resume` stopped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Resume again with `Some(value)` to continue.
    NeedInput,
    /// Resume again with `None` to continue.
    Output(i64),
    Halted,
}
