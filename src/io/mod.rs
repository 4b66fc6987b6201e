//! # Reading of integer programs
//!
//! This module provides read functionality for problem files.
use std::fs;
use std::path::Path;

use crate::io::error::ImportError;
use crate::io::json::ProblemFile;

pub mod error;
pub mod json;

/// Import a problem from a file.
///
/// Currently only supports the JSON format described in the `json` module.
///
/// The `import` function takes a file path and returns, if successful, a struct which can be
/// converted to a problem over any of the supported number types.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or the contents are not a
/// problem description, an error type is returned.
pub fn import(file_path: &Path) -> Result<ProblemFile, ImportError> {
    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json") => {
                let program = fs::read_to_string(file_path)?;
                json::parse(&program)
            },
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}
