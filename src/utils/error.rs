use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdpage operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for document conversion
#[derive(Debug)]
pub enum ConvertError {
    /// No Markdown renderer is registered, so nothing can be converted
    RendererUnavailable,
    /// IO error wrapper
    Io(io::Error),
    /// Options file or option value error
    Config(String),
    /// Syntax highlighting error
    Highlight(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::RendererUnavailable => {
                write!(f, "Markdown renderer is not available")
            }
            ConvertError::Io(err) => write!(f, "IO error: {}", err),
            ConvertError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ConvertError::Highlight(msg) => write!(f, "Highlight error: {}", msg),
            ConvertError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<String> for ConvertError {
    fn from(msg: String) -> Self {
        ConvertError::Generic(msg)
    }
}

impl From<&str> for ConvertError {
    fn from(msg: &str) -> Self {
        ConvertError::Generic(msg.to_string())
    }
}
