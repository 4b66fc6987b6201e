//! # Error reporting for reading of problem files
//!
//! Anything that can go wrong between a path on disk and a problem that the solver accepts.
use std::io;

use thiserror::Error;

use crate::error::IlpError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file are not a syntactically valid problem description.
    #[error("could not parse problem file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A number from the file can't be represented in the requested number type.
    #[error("value {value} at {location} can't be represented exactly")]
    Conversion {
        /// Where in the file the value was found, such as `weights[1][3]`.
        location: String,
        /// The offending value.
        value: f64,
    },
    /// The numbers in the file don't describe a consistent problem.
    ///
    /// For example, a constraint row might have a different length than the objective.
    #[error(transparent)]
    LinearProgram(#[from] IlpError),
}
