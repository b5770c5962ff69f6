//! # Intcode
//! This repository contains a small, resumable virtual machine
//! for the Intcode instruction set, along with utilities for
//! loading programs from text.
//! If you're looking for the command-line runner,
//! see the `intcode-cli` crate.
//!
//! ## Driving a machine
//! A `VM` never runs on its own. Each call to `VM::resume`
//! runs it until it asks for input, produces output, or halts:
//! ```
//! use intcode::{Event, VM};
//!
//! let mut vm = VM::init(&[3, 0, 4, 0, 99]);
//! assert_eq!(vm.resume(None), Ok(Event::NeedInput));
//! assert_eq!(vm.resume(Some(7)), Ok(Event::Output(7)));
//! assert_eq!(vm.resume(None), Ok(Event::Halted));
//! ```
//! Because machines only move when resumed, outputs of one
//! can be fed as inputs to another by whatever drives them.
//!
//! ## Loading programs
//! Program text is a `Source`, parsed into a `Program`:
//! ```
//! use intcode::{run, Program, Source};
//!
//! let program = Program::parse(&Source::source("3,0,4,0,99\n")).unwrap();
//! assert_eq!(run(&program, [42]), Ok(vec![42]));
//! ```

pub mod common;
pub mod vm;

pub use common::{Program, Source, Syntax};
pub use vm::{Event, Kind, State, Trace, VM};

/// Runs a program to completion,
/// answering each input request with the next value from `input`
/// and collecting every output.
/// Fails with `Kind::MissingInput` if `input` runs dry.
pub fn run(program: &[i64], input: impl IntoIterator<Item = i64>) -> Result<Vec<i64>, Trace> {
    let mut input = input.into_iter();
    let mut vm = VM::init(program);
    let mut outputs = vec![];
    let mut pending = None;

    loop {
        match vm.resume(pending.take())? {
            Event::NeedInput => match input.next() {
                Some(value) => pending = Some(value),
                None => return Err(Trace::error(Kind::MissingInput, vm.instruction())),
            },
            Event::Output(value) => outputs.push(value),
            Event::Halted => return Ok(outputs),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const COMPARE_TO_EIGHT: [i64; 47] = [
        3, 21, 1008, 21, 8, 20, 1005, 20, 22, 107, 8, 21, 20, 1006, 20, 31, 1106, 0, 36, 98, 0,
        0, 1002, 21, 125, 20, 4, 20, 1105, 1, 46, 104, 999, 1105, 1, 46, 1101, 1000, 1, 20, 4,
        20, 1105, 1, 46, 98, 99,
    ];

    #[test]
    fn compare_to_eight() {
        assert_eq!(run(&COMPARE_TO_EIGHT, [7]), Ok(vec![999]));
        assert_eq!(run(&COMPARE_TO_EIGHT, [8]), Ok(vec![1000]));
        assert_eq!(run(&COMPARE_TO_EIGHT, [9]), Ok(vec![1001]));
    }

    #[test]
    fn quine() {
        let program = [109, 1, 204, -1, 1001, 100, 1, 100, 1008, 100, 16, 101, 1006, 101, 0, 99];
        assert_eq!(run(&program, std::iter::empty()), Ok(program.to_vec()));
    }

    #[test]
    fn missing_input() {
        let program = [3, 9, 3, 10, 4, 10, 4, 9, 99];
        assert_eq!(run(&program, [1, 2]), Ok(vec![2, 1]));
        assert_eq!(
            run(&program, [1]),
            Err(Trace::error(Kind::MissingInput, 2))
        );
    }

    #[test]
    fn leftover_input_is_ignored() {
        assert_eq!(run(&[104, 5, 99], [1, 2, 3]), Ok(vec![5]));
    }

    #[test]
    fn pipeline() {
        // two machines, the first feeding the second
        let double = [3, 9, 1002, 9, 2, 9, 4, 9, 99];
        let mut first = VM::init(&double);
        let mut second = VM::init(&double);

        assert_eq!(first.resume(None), Ok(Event::NeedInput));
        assert_eq!(second.resume(None), Ok(Event::NeedInput));

        let value = match first.resume(Some(5)) {
            Ok(Event::Output(value)) => value,
            other => panic!("expected output, found {:?}", other),
        };
        assert_eq!(second.resume(Some(value)), Ok(Event::Output(20)));
        assert_eq!(first.resume(None), Ok(Event::Halted));
        assert_eq!(second.resume(None), Ok(Event::Halted));
    }
}
