//! Filesystem collaborator: `file://` URI to note text.

use lsp_types::Url;
use std::fmt;
use tokio::fs;

/// Errors reading a document URI. All input errors are reported, never
/// panicked on; `NotFound` is distinguished so hover can soften it into an
/// empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// The URI scheme is not `file` (or the URI has no usable path).
    UnsupportedScheme(String),
    /// The file does not exist.
    NotFound(String),
    /// Any other read failure.
    Io(String),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::UnsupportedScheme(scheme) => {
                write!(f, "unsupported uri scheme: {scheme}")
            }
            FileError::NotFound(uri) => write!(f, "uri not found in fs: {uri}"),
            FileError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for FileError {}

/// Read the full text behind a `file://` URI.
pub async fn read_uri(uri: &Url) -> Result<String, FileError> {
    if uri.scheme() != "file" {
        return Err(FileError::UnsupportedScheme(uri.scheme().to_string()));
    }
    let path = uri
        .to_file_path()
        .map_err(|_| FileError::UnsupportedScheme(uri.scheme().to_string()))?;
    match fs::read_to_string(&path).await {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(FileError::NotFound(uri.to_string()))
        }
        Err(err) => Err(FileError::Io(err.to_string())),
    }
}
