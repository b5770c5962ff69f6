use std::{
    collections::VecDeque,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use intcode::{Event, Program, Source, VM};

use crate::{
    cli::Run,
    manifest::Manifest,
    status::Status,
    SOURCE,
};

/// Where input comes from once the queued values run out.
pub enum Feed<R> {
    Queue,
    Lines(R),
}

impl<R: BufRead> Feed<R> {
    fn next(&mut self) -> Result<i64, String> {
        let reader = match self {
            Feed::Queue => {
                return Err("The program requested input, but none remains".to_string())
            },
            Feed::Lines(reader) => reader,
        };

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .map_err(|_| "Could not read input")?;
        if read == 0 {
            return Err("Input closed before the program finished".to_string());
        }

        line.trim()
            .parse()
            .map_err(|_| format!("Expected an integer as input, found '{}'", line.trim()))
    }
}

/// Runs a machine to completion, handing every output to `emit`.
pub fn drive<R: BufRead>(
    vm: &mut VM,
    mut queue: VecDeque<i64>,
    mut feed: Feed<R>,
    mut emit: impl FnMut(i64),
) -> Result<(), String> {
    let mut pending = None;

    loop {
        match vm.resume(pending.take()).map_err(|e| e.to_string())? {
            Event::NeedInput => {
                pending = Some(match queue.pop_front() {
                    Some(value) => value,
                    None => feed.next()?,
                });
            },
            Event::Output(value) => emit(value),
            Event::Halted => return Ok(()),
        }
    }
}

/// Works out which program to run, what to feed it, and whether to dump memory.
/// A file runs on its own; a directory is searched upward for a package.
pub fn resolve(
    path: &Path,
    extra: Vec<i64>,
    dump: bool,
) -> Result<(PathBuf, Vec<i64>, bool), String> {
    if path.is_file() {
        return Ok((path.to_path_buf(), extra, dump));
    }

    if !path.is_dir() {
        return Err(format!("No program or package found at '{}'", path.display()));
    }

    let (manifest, root) = Manifest::package(path)?;
    let mut input = manifest.run.input;
    input.extend(extra);

    Ok((
        root.join(SOURCE).join(&manifest.run.entrypoint),
        input,
        dump || manifest.run.dump,
    ))
}

pub fn run(options: Run) -> Result<(), String> {
    let (file, input, dump) = resolve(&options.package.path, options.input, options.dump)?;

    let source = Source::path(&file)
        .map_err(|_| format!("Could not read program '{}'", file.display()))?;
    let program = Program::parse(&source).map_err(|e| e.to_string())?;

    Status::info().log(&format!(
        "Running '{}' ({} cells)",
        file.display(),
        program.len()
    ));

    let mut vm = VM::init(&program);
    let stdin = io::stdin();
    let feed = if options.stdin {
        Feed::Lines(stdin.lock())
    } else {
        Feed::Queue
    };

    drive(&mut vm, input.into(), feed, |value| println!("{}", value))?;

    if dump {
        println!("{}", vm.memory());
    }

    Status::success().log("The program halted");
    Ok(())
}

#[cfg(test)]
mod test {
    use std::{env, fs, io::Cursor};

    use super::*;
    use crate::{ENTRYPOINT, MANIFEST};

    fn collect(program: &[i64], queue: &[i64], lines: Option<&str>) -> Result<Vec<i64>, String> {
        let mut vm = VM::init(program);
        let mut output = vec![];
        let feed = match lines {
            Some(text) => Feed::Lines(Cursor::new(text.to_string())),
            None => Feed::Queue,
        };
        drive(&mut vm, queue.iter().copied().collect(), feed, |v| output.push(v))?;
        Ok(output)
    }

    #[test]
    fn queued() {
        let program = [3, 9, 3, 10, 4, 10, 4, 9, 99];
        assert_eq!(collect(&program, &[1, 2], None), Ok(vec![2, 1]));
    }

    #[test]
    fn queue_then_lines() {
        let program = [3, 9, 3, 10, 4, 10, 4, 9, 99];
        assert_eq!(collect(&program, &[1], Some(" -7\n")), Ok(vec![-7, 1]));
    }

    #[test]
    fn runs_dry() {
        let program = [3, 0, 3, 0, 99];
        assert!(collect(&program, &[1], None).is_err());
        assert!(collect(&program, &[1], Some("")).is_err());
        assert!(collect(&program, &[], Some("one\n")).is_err());
    }

    #[test]
    fn traces_are_reported() {
        let error = collect(&[42], &[], None).unwrap_err();
        assert!(error.starts_with("Runtime Opcode Error"));
    }

    fn scratch(name: &str) -> PathBuf {
        let dir = env::temp_dir()
            .join(format!("intcode-run-{}", std::process::id()))
            .join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join(SOURCE)).unwrap();
        dir
    }

    #[test]
    fn package_inputs_come_first() {
        let package = scratch("package");
        fs::write(
            package.join(MANIFEST),
            "[package]\nname = \"echo\"\nversion = \"0.1.0\"\nauthors = []\n\n[run]\ninput = [1]\n",
        )
        .unwrap();
        fs::write(package.join(SOURCE).join(ENTRYPOINT), "3,0,3,1,4,0,4,1,99\n").unwrap();

        // searched for upward from inside the package
        let (file, input, dump) = resolve(&package.join(SOURCE), vec![2], false).unwrap();
        assert_eq!(file, package.join(SOURCE).join(ENTRYPOINT));
        assert_eq!(input, vec![1, 2]);
        assert!(!dump);

        let (_, _, dump) = resolve(&package, vec![], true).unwrap();
        assert!(dump);

        let _ = fs::remove_dir_all(&package);
    }

    #[test]
    fn manifest_can_dump() {
        let package = scratch("dump");
        fs::write(
            package.join(MANIFEST),
            "[package]\nname = \"dump\"\nversion = \"0.1.0\"\nauthors = []\n\n[run]\ndump = true\n",
        )
        .unwrap();

        let (_, input, dump) = resolve(&package, vec![], false).unwrap();
        assert!(input.is_empty());
        assert!(dump);

        let _ = fs::remove_dir_all(&package);
    }

    #[test]
    fn files_run_directly() {
        let package = scratch("file");
        fs::write(
            package.join(MANIFEST),
            "[package]\nname = \"file\"\nversion = \"0.1.0\"\nauthors = []\n\n[run]\ninput = [9]\ndump = true\n",
        )
        .unwrap();
        let program = package.join("day5.ic");
        fs::write(&program, "3,0,4,0,99\n").unwrap();

        // the enclosing manifest is not consulted
        let (file, input, dump) = resolve(&program, vec![2], false).unwrap();
        assert_eq!(file, program);
        assert_eq!(input, vec![2]);
        assert!(!dump);

        let _ = fs::remove_dir_all(&package);
    }

    #[test]
    fn missing_paths_are_not_searched() {
        let package = scratch("typo");
        fs::write(
            package.join(MANIFEST),
            "[package]\nname = \"typo\"\nversion = \"0.1.0\"\nauthors = []\n",
        )
        .unwrap();

        let error = resolve(&package.join("typo.ic"), vec![], false).unwrap_err();
        assert!(error.starts_with("No program or package found"));

        let _ = fs::remove_dir_all(&package);
    }
}
