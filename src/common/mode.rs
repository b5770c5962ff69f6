/// How a parameter cell is turned into an address.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The cell holds the address.
    Position  = 0,
    /// The cell is the address; its value is used directly.
    Immediate = 1,
    /// The cell holds an offset from the relative base.
    Relative  = 2,
}

impl Mode {
    /// Picks the mode digit of the parameter at `index` (zero-based)
    /// out of the digits left over after the opcode.
    /// Missing digits are `0`, i.e. position mode.
    pub fn digit(modes: i64, index: u32) -> i64 {
        let mut modes = modes;
        for _ in 0..index {
            modes = modes.div_euclid(10);
        }
        modes.rem_euclid(10)
    }

    pub fn from_digit(digit: i64) -> Option<Mode> {
        match digit {
            0 => Some(Mode::Position),
            1 => Some(Mode::Immediate),
            2 => Some(Mode::Relative),
            _ => None,
        }
    }
}
