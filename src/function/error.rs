// error.rs
use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("You must specify a URL to test")]
    Usage,

    #[error("{0}")]
    Invocation(String),

    #[error("Could not generate report for: {url}")]
    EmptyOutput { url: String },

    #[error("Could not parse report: {0}")]
    ReportParse(String),

    #[error("Could not remove report file: {0}")]
    Cleanup(String),

    #[error("No scan result available for: {url}")]
    NoResult { url: String },

    #[error("File operation failed: {0}")]
    IOError(String),

    #[error("Serialization failed: {0}")]
    SerializationError(String),
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        ScanError::IOError(err.to_string())
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::SerializationError(err.to_string())
    }
}
