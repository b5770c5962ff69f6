use std::{fs, path::PathBuf};

use crate::{
    manifest::Manifest,
    status::Status,
    ENTRYPOINT,
    MANIFEST,
    SOURCE,
};

/// Reads one value and writes it back out.
const ECHO: &str = "3,0,4,0,99\n";

pub fn new(package: PathBuf) -> Result<(), String> {
    // the package is named after its directory
    let name = package
        .file_name()
        .ok_or("Can not determine directory name")?
        .to_str()
        .ok_or("Directory name is not representable")?
        .to_owned();

    fs::create_dir_all(&package)
        .map_err(|_| "Unable to create package directory")?;

    if package.join(MANIFEST).is_file() {
        Status::warn().log(&format!(
            "The manifest file ({}) has already been created",
            MANIFEST
        ))
    } else {
        let manifest = Manifest::new(name.clone());
        fs::write(
            package.join(MANIFEST),
            toml::to_string_pretty(&manifest)
                .map_err(|_| "Could not generate manifest file")?,
        )
        .map_err(|_| "Could not write manifest file")?;
    }

    if !package.join(SOURCE).is_dir() {
        fs::create_dir(package.join(SOURCE))
            .map_err(|_| "Could not create source directory")?;
    }

    if package.join(SOURCE).join(ENTRYPOINT).is_file() {
        Status::warn().log(&format!(
            "The program ({}/{}) has already been created",
            SOURCE, ENTRYPOINT
        ));
    } else {
        fs::write(package.join(SOURCE).join(ENTRYPOINT), ECHO)
            .map_err(|_| "Could not create program entrypoint")?;
    }

    Status::success()
        .log(&format!("The package '{}' was created successfully", name));
    Ok(())
}

#[cfg(test)]
mod test {
    use std::env;

    use super::*;

    #[test]
    fn scaffold() {
        let package = env::temp_dir()
            .join(format!("intcode-new-{}", std::process::id()))
            .join("echo");
        let _ = fs::remove_dir_all(&package);

        new(package.clone()).unwrap();
        // a second run leaves everything alone
        new(package.clone()).unwrap();

        let source = package.join(SOURCE);
        let (manifest, root) = Manifest::package(&source).unwrap();
        assert_eq!(manifest.package.name, "echo");
        assert_eq!(root, package.as_path());
        assert_eq!(
            fs::read_to_string(package.join(SOURCE).join(ENTRYPOINT)).unwrap(),
            ECHO
        );

        let _ = fs::remove_dir_all(&package);
    }
}
