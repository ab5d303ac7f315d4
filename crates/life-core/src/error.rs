//! Error types for the simulation.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid field dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Field of {width}x{height} exceeds the limit of {max_cells} cells")]
    FieldTooLarge {
        width: i32,
        height: i32,
        max_cells: usize,
    },

    #[error("Could not read seed file [{}]: {source}", .path.display())]
    SeedFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file [{}] is empty", .0.display())]
    EmptySeedFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidDimensions { width: 0, height: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid field dimensions: 0x5 (both must be positive)"
        );

        let err = Error::EmptySeedFile(PathBuf::from("glider.txt"));
        assert_eq!(err.to_string(), "Seed file [glider.txt] is empty");
    }

    #[test]
    fn test_from_serde_json() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
