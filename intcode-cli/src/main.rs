use structopt::StructOpt;

// argument parser and configuation
pub mod cli;
pub mod manifest;
pub mod status;

// command implementations
pub mod new;
pub mod run;

use crate::{cli::Intcode, status::Status};

pub const MANIFEST: &str = "intcode.toml";
pub const SOURCE: &str = "src";
pub const ENTRYPOINT: &str = "main.ic";

fn main() {
    let subcommand = Intcode::from_args();

    let result = match subcommand {
        Intcode::New(package) => new::new(package.path),
        Intcode::Run(options) => run::run(options),
    };

    if let Err(r) = result {
        Status::fatal().log(&r);
        std::process::exit(1);
    }
}
