//! Error types for the DXF feature codec

use std::io;
use thiserror::Error;

/// Main error type for decode and encode operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error on the source or the sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A value that had to be numeric could not be parsed
    #[error("Malformed number for group code {code}: '{value}'")]
    MalformedNumber { code: i32, value: String },

    /// A group code line that is not an integer
    #[error("Malformed group code at line {line}: '{value}'")]
    MalformedGroupCode { line: usize, value: String },

    /// The stream ended inside a section, table or entity
    #[error("Unexpected end of stream while reading {0}")]
    UnexpectedEndOfStream(String),

    /// The source is not an ASCII DXF stream
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, DxfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::MalformedNumber {
            code: 10,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed number for group code 10: 'abc'");
    }

    #[test]
    fn test_end_of_stream_display() {
        let err = DxfError::UnexpectedEndOfStream("ENTITIES section".to_string());
        assert!(err.to_string().contains("ENTITIES section"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
