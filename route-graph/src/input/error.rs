//! Input loading error types.

use std::path::PathBuf;

/// Errors that can occur while reading input files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV stream could not be decoded
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON document could not be parsed
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LoadError::Io {
            path: PathBuf::from("storage/graph/trips.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read storage/graph/trips.csv: no such file"
        );

        let err = LoadError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }
}
