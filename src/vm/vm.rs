use crate::common::{mode::Mode, opcode::Opcode};
use crate::vm::{
    event::{Event, State},
    memory::Memory,
    trace::{Kind, Trace},
};

/// A `VM` executes an Intcode program.
/// Each VM's state is self-contained,
/// so more than one can be spawned if needed.
/// Cloning a `VM` forks it: the copy shares nothing with the original.
#[derive(Debug, Clone)]
pub struct VM {
    memory: Memory,
    ip:     usize,
    base:   i64,
    state:  State,
    // first cell and mode digits of the instruction being executed
    start:  usize,
    modes:  i64,
}

// this impl contains initialization, helper functions, and the core interpreter loop
// the next impl contains opcode implementations
impl VM {
    /// Initialize a new VM with a program loaded at address `0`.
    /// Nothing is validated until the program runs.
    pub fn init(program: &[i64]) -> VM {
        VM {
            memory: Memory::load(program),
            ip:     0,
            base:   0,
            state:  State::Ready,
            start:  0,
            modes:  0,
        }
    }

    pub fn state(&self) -> State   { self.state }
    pub fn ip(&self) -> usize      { self.ip }
    pub fn base(&self) -> i64      { self.base }
    pub fn memory(&self) -> &Memory { &self.memory }

    /// Address of the instruction most recently decoded.
    /// While awaiting input, this is the input instruction.
    pub fn instruction(&self) -> usize { self.start }

    fn next(&mut self) { self.ip += 1; }

    /// Builds a trace for the instruction being executed,
    /// rewinding to its first cell so that resuming fails the same way again.
    fn fault(&mut self, kind: Kind) -> Trace {
        self.ip = self.start;
        Trace::error(kind, self.start)
    }

    /// Checks that a computed address can be used.
    fn location(&mut self, address: i64) -> Result<usize, Trace> {
        if address < 0 {
            return Err(self.fault(Kind::NegativeAddress(address)));
        }
        usize::try_from(address).map_err(|_| self.fault(Kind::Overflow))
    }

    /// Mode of the parameter at `index`, zero-based.
    fn mode(&mut self, index: u32) -> Result<Mode, Trace> {
        let digit = Mode::digit(self.modes, index);
        Mode::from_digit(digit).ok_or_else(|| self.fault(Kind::InvalidMode(digit)))
    }

    /// Resolves the address of the parameter at `index`, consuming its cell.
    /// The cell's own address is taken before `ip` moves past it,
    /// which is what immediate mode resolves to.
    fn address(&mut self, index: u32) -> Result<usize, Trace> {
        let mode = self.mode(index)?;
        let cell = self.ip;
        self.next();

        let raw = self.memory.read(cell);
        match mode {
            Mode::Position => self.location(raw),
            Mode::Immediate => Ok(cell),
            Mode::Relative => match raw.checked_add(self.base) {
                Some(address) => self.location(address),
                None => Err(self.fault(Kind::Overflow)),
            },
        }
    }

    /// Resolves the value of the parameter at `index`.
    fn value(&mut self, index: u32) -> Result<i64, Trace> {
        let address = self.address(index)?;
        Ok(self.memory.read(address))
    }

    /// Resolves a write target; immediate mode can't be written through.
    fn target(&mut self, index: u32) -> Result<usize, Trace> {
        if self.mode(index)? == Mode::Immediate {
            return Err(self.fault(Kind::ImmediateWrite));
        }
        self.address(index)
    }

    // core interpreter loop

    /// Decodes and executes a single instruction.
    /// Returns an event if the instruction suspends the machine.
    fn step(&mut self) -> Result<Option<Event>, Trace> {
        self.start = self.ip;
        let cell = self.memory.read(self.ip);
        let (number, modes) = Opcode::split(cell);
        self.modes = modes;
        self.next();

        let opcode = match Opcode::from_number(number) {
            Some(opcode) => opcode,
            None => return Err(self.fault(Kind::InvalidOpcode(cell))),
        };

        match opcode {
            Opcode::Add      => self.add(),
            Opcode::Mul      => self.mul(),
            Opcode::Input    => self.input(),
            Opcode::Output   => self.output(),
            Opcode::JumpTrue => self.jump(|c| c != 0),
            Opcode::JumpZero => self.jump(|c| c == 0),
            Opcode::Less     => self.compare(|c, b| c < b),
            Opcode::Equal    => self.compare(|c, b| c == b),
            Opcode::Rebase   => self.rebase(),
            Opcode::Halt     => self.halt(),
        }
    }

    /// Runs the machine until it needs input, produces output, or halts.
    ///
    /// - A machine awaiting input takes `Some(value)` and continues the
    ///   suspended input instruction; resuming it with `None` reports
    ///   `Event::NeedInput` again without doing anything.
    /// - Any other running machine must be resumed with `None`;
    ///   input it did not ask for is rejected and nothing executes.
    /// - A halted machine can not be resumed.
    ///
    /// Errors are final for the faulting instruction:
    /// memory is left as it was before it, and resuming again
    /// reports the same error.
    pub fn resume(&mut self, input: Option<i64>) -> Result<Event, Trace> {
        match (self.state, input) {
            (State::Halted, _) => {
                return Err(Trace::error(Kind::ResumeAfterHalt, self.start));
            },
            (State::AwaitingInput, None) => return Ok(Event::NeedInput),
            (State::AwaitingInput, Some(value)) => self.supply(value)?,
            (_, Some(value)) => {
                return Err(Trace::error(Kind::UnexpectedInput(value), self.ip));
            },
            (_, None) => self.state = State::Running,
        }

        loop {
            if let Some(event) = self.step()? {
                return Ok(event);
            }
        }
    }
}

impl VM {
    fn add(&mut self) -> Result<Option<Event>, Trace> {
        let c = self.value(0)?;
        let b = self.value(1)?;
        match c.checked_add(b) {
            Some(sum) => self.store(2, sum),
            None => Err(self.fault(Kind::Overflow)),
        }
    }

    fn mul(&mut self) -> Result<Option<Event>, Trace> {
        let c = self.value(0)?;
        let b = self.value(1)?;
        match c.checked_mul(b) {
            Some(product) => self.store(2, product),
            None => Err(self.fault(Kind::Overflow)),
        }
    }

    fn store(&mut self, index: u32, value: i64) -> Result<Option<Event>, Trace> {
        let dest = self.target(index)?;
        self.memory.write(dest, value);
        Ok(None)
    }

    /// Suspends the machine until `resume` is called with a value.
    /// The destination is checked up front,
    /// so a malformed input instruction never asks for input.
    fn input(&mut self) -> Result<Option<Event>, Trace> {
        if self.mode(0)? == Mode::Immediate {
            return Err(self.fault(Kind::ImmediateWrite));
        }
        self.state = State::AwaitingInput;
        Ok(Some(Event::NeedInput))
    }

    /// Finishes a suspended input instruction.
    fn supply(&mut self, value: i64) -> Result<(), Trace> {
        self.state = State::Running;
        self.store(0, value)?;
        Ok(())
    }

    fn output(&mut self) -> Result<Option<Event>, Trace> {
        let c = self.value(0)?;
        Ok(Some(Event::Output(c)))
    }

    fn jump(&mut self, taken: fn(i64) -> bool) -> Result<Option<Event>, Trace> {
        let c = self.value(0)?;
        let b = self.value(1)?;
        if taken(c) {
            self.ip = self.location(b)?;
        }
        Ok(None)
    }

    fn compare(&mut self, holds: fn(i64, i64) -> bool) -> Result<Option<Event>, Trace> {
        let c = self.value(0)?;
        let b = self.value(1)?;
        self.store(2, if holds(c, b) { 1 } else { 0 })
    }

    fn rebase(&mut self) -> Result<Option<Event>, Trace> {
        let c = self.value(0)?;
        match self.base.checked_add(c) {
            Some(base) => self.base = base,
            None => return Err(self.fault(Kind::Overflow)),
        }
        Ok(None)
    }

    fn halt(&mut self) -> Result<Option<Event>, Trace> {
        self.state = State::Halted;
        Ok(Some(Event::Halted))
    }
}
