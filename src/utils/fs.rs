use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::TocError;

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, TocError> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Read a document from the given path, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String, TocError> {
    match path {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TocError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
