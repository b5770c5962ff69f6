/// This enum represents a single opcode.
/// Under the hood, it's the low two decimal digits
/// of an instruction's first cell;
/// the digits above those select parameter modes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Add two values into a destination.
    Add      = 1,
    /// Multiply two values into a destination.
    Mul      = 2,
    /// Suspend for one input value, then store it.
    Input    = 3,
    /// Emit a value to the caller.
    Output   = 4,
    /// Jump if the first value is non-zero.
    JumpTrue = 5,
    /// Jump if the first value is zero.
    JumpZero = 6,
    /// Store `1` if the first value is less than the second, else `0`.
    Less     = 7,
    /// Store `1` if both values are equal, else `0`.
    Equal    = 8,
    /// Adjust the relative base.
    Rebase   = 9,
    /// Stop the machine for good.
    Halt     = 99,
}

impl Opcode {
    /// Splits an instruction cell into its opcode and the
    /// remaining mode digits.
    /// Uses the mathematical modulus, so negative cells still
    /// select an opcode in `0..100`.
    pub fn split(code: i64) -> (i64, i64) {
        (code.rem_euclid(100), code.div_euclid(100))
    }

    /// Convert a raw opcode number to an `Opcode`,
    /// returning `None` for numbers with no meaning.
    pub fn from_number(number: i64) -> Option<Opcode> {
        let opcode = match number {
            1 => Opcode::Add,
            2 => Opcode::Mul,
            3 => Opcode::Input,
            4 => Opcode::Output,
            5 => Opcode::JumpTrue,
            6 => Opcode::JumpZero,
            7 => Opcode::Less,
            8 => Opcode::Equal,
            9 => Opcode::Rebase,
            99 => Opcode::Halt,
            _ => return None,
        };
        Some(opcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe() {
        assert_eq!(None, Opcode::from_number(0));
        assert_eq!(None, Opcode::from_number(10));
        assert_eq!(Some(Opcode::Halt), Opcode::from_number(Opcode::Halt as i64));
        for number in 1..=9 {
            assert_eq!(Some(number as u8), Opcode::from_number(number).map(|o| o as u8));
        }
    }

    #[test]
    fn split() {
        assert_eq!(Opcode::split(1002), (2, 10));
        assert_eq!(Opcode::split(21101), (1, 211));
        assert_eq!(Opcode::split(99), (99, 0));
        assert_eq!(Opcode::split(-1), (99, -1));
    }
}
