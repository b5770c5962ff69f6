use std::{env::current_dir, ffi::OsStr, path::PathBuf};

use structopt::StructOpt;

/// Resolves `.` to the working directory,
/// so the manifest search can walk up past it.
pub fn package_dir(path: &OsStr) -> PathBuf {
    if path == "." {
        current_dir().unwrap_or_else(|_| PathBuf::from(path))
    } else {
        PathBuf::from(path)
    }
}

#[derive(StructOpt, Debug)]
pub struct Package {
    #[structopt(default_value = ".", parse(from_os_str = package_dir))]
    pub path: PathBuf,
}

#[derive(StructOpt, Debug)]
pub struct Run {
    /// A package directory, or a single program file
    #[structopt(flatten)]
    pub package: Package,

    /// A value to feed the program, after any listed in the manifest
    #[structopt(short, long, allow_hyphen_values = true, number_of_values = 1)]
    pub input: Vec<i64>,

    /// Read further input from stdin, one integer per line
    #[structopt(long)]
    pub stdin: bool,

    /// Print the program's memory once it halts
    #[structopt(long)]
    pub dump: bool,
}

#[derive(StructOpt, Debug)]
#[structopt(name = "Intcode", bin_name = "intcode", about)]
pub enum Intcode {
    /// Creates a new Intcode package
    New(Package),
    /// Runs the specified package or program
    Run(Run),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_inputs() {
        let parsed = Intcode::from_iter([
            "intcode", "run", "day5.ic", "-i", "-5", "--input", "3", "--dump",
        ]);

        match parsed {
            Intcode::Run(run) => {
                assert_eq!(run.package.path, PathBuf::from("day5.ic"));
                assert_eq!(run.input, vec![-5, 3]);
                assert!(run.dump);
                assert!(!run.stdin);
            },
            other => panic!("expected run, found {:?}", other),
        }
    }

    #[test]
    fn bad_input() {
        let parsed = Intcode::from_iter_safe(["intcode", "run", "-i", "five"]);
        assert!(parsed.is_err());
    }
}
