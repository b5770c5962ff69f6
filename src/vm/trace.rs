use std::fmt;

/// The kinds of runtime failure.
/// Each carries the value that caused it, where there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// The instruction cell (not just its low two digits).
    InvalidOpcode(i64),
    InvalidMode(i64),
    /// A resolved address or jump target below zero.
    NegativeAddress(i64),
    ImmediateWrite,
    Overflow,
    ResumeAfterHalt,
    /// Input was supplied while the machine was not waiting for any.
    UnexpectedInput(i64),
    /// A driver ran out of input to answer a request with.
    MissingInput,
}

impl Kind {
    fn name(&self) -> &'static str {
        match self {
            Kind::InvalidOpcode(_) => "Opcode",
            Kind::InvalidMode(_) => "Mode",
            Kind::NegativeAddress(_) => "Address",
            Kind::ImmediateWrite => "Write",
            Kind::Overflow => "Overflow",
            Kind::ResumeAfterHalt => "Resume",
            Kind::UnexpectedInput(_) | Kind::MissingInput => "Input",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::InvalidOpcode(cell) => {
                write!(f, "invalid opcode {} in cell {}", cell.rem_euclid(100), cell)
            },
            Kind::InvalidMode(mode) => write!(f, "invalid parameter mode {}", mode),
            Kind::NegativeAddress(address) => write!(f, "negative address {}", address),
            Kind::ImmediateWrite => write!(f, "immediate mode used as a write target"),
            Kind::Overflow => write!(f, "integer overflow"),
            Kind::ResumeAfterHalt => write!(f, "the machine has already halted"),
            Kind::UnexpectedInput(value) => {
                write!(f, "input {} was supplied, but none was requested", value)
            },
            Kind::MissingInput => write!(f, "input was requested, but none remains"),
        }
    }
}

/// Represents a runtime error.
/// `ip` is the address of the instruction that failed,
/// or the current instruction pointer for errors raised
/// before any instruction was decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub kind: Kind,
    pub ip: usize,
}

impl Trace {
    pub fn error(kind: Kind, ip: usize) -> Trace {
        Trace { kind, ip }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Runtime {} Error: {}, at ip {}",
            self.kind.name(),
            self.kind,
            self.ip
        )
    }
}

impl std::error::Error for Trace {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn traceback() {
        let trace = Trace::error(Kind::InvalidOpcode(1042), 7);
        assert_eq!(
            trace.to_string(),
            "Runtime Opcode Error: invalid opcode 42 in cell 1042, at ip 7"
        );
    }

    #[test]
    fn address() {
        let trace = Trace::error(Kind::NegativeAddress(-3), 2);
        assert_eq!(
            trace.to_string(),
            "Runtime Address Error: negative address -3, at ip 2"
        );
    }
}
