use std::{
    fs::File,
    io::Read,
    path::Path,
};

use semver::Version;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{ENTRYPOINT, MANIFEST};

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub package: Package,
    #[serde(default)]
    pub run:     Run,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Package {
    // required keys
    pub name:    String,      // package name
    pub version: String,      // package version, using semver
    pub authors: Vec<String>, // package authors

    // optional keys
    pub readme:      Option<String>, // path to package's readme
    pub license:     Option<String>, // path to package's license
    pub repository:  Option<String>, // URL to package's repository
}

/// How the package's program is run.
#[derive(Debug, Serialize, Deserialize)]
pub struct Run {
    /// Program file, relative to the source directory.
    #[serde(default = "entrypoint")]
    pub entrypoint: String,
    /// Values fed to the program before any given on the command line.
    #[serde(default)]
    pub input:      Vec<i64>,
    /// Print memory once the program halts.
    #[serde(default)]
    pub dump:       bool,
}

fn entrypoint() -> String {
    ENTRYPOINT.to_string()
}

impl Default for Run {
    fn default() -> Run {
        Run {
            entrypoint: entrypoint(),
            input:      vec![],
            dump:       false,
        }
    }
}

impl Manifest {
    pub fn new(name: String) -> Manifest {
        Manifest {
            package: Package {
                name,
                version: format!("{}", Version::new(0, 0, 0)),
                authors: vec![],
                readme: None,
                license: None,
                repository: None,
            },
            run:     Run::default(),
        }
    }

    /// Searches up from `path` for a manifest,
    /// returning it along with the package directory it was found in.
    pub fn package(mut path: &Path) -> Result<(Manifest, &Path), String> {
        let mut file = loop {
            match File::open(path.join(MANIFEST)) {
                Ok(f) => break f,
                Err(_) => {
                    path = path
                        .parent()
                        .ok_or("The manifest file could not be found")?;
                },
            }
        };

        let mut source = String::new();
        file.read_to_string(&mut source)
            .map_err(|_| "The manifest file could not be read")?;

        Ok((Manifest::parse(&source)?, path))
    }

    pub fn parse(source: &str) -> Result<Manifest, String> {
        let manifest: Manifest = toml::from_str(source)
            .map_err(|e| format!("Could not parse the manifest file: {}", e))?;

        Version::parse(&manifest.package.version).map_err(|_| {
            format!(
                "The package version '{}' is not a valid semantic version",
                manifest.package.version
            )
        })?;

        Ok(manifest)
    }
}
