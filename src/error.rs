//! Errors that can occur while writing a response.
//!

use std::fmt::{self, Display, Formatter};
use std::io::{self, Error as IoError};

/// A type alias for `Box<dyn Error + Send + Sync>`.
///
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A type alias for `std::result::Result` with [`Error`] as the default error.
///
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// The error returned by each of the response helpers.
///
/// The head of the response (status and headers) may already be committed
/// when an error is returned. Callers should not expect to change the status
/// of a response after a failed call.
///
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Encode(BoxError),
    Http(http::Error),
    Io(IoError),
    Template(BoxError),
}

impl Error {
    /// Returns a new error that occurred while serializing a payload.
    ///
    pub fn encode(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorKind::Encode(source.into()),
        }
    }

    /// Returns a new error that occurred while rendering a template.
    ///
    pub fn template(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorKind::Template(source.into()),
        }
    }

    /// Returns true if the payload could not be serialized.
    ///
    pub fn is_encode(&self) -> bool {
        matches!(self.kind, ErrorKind::Encode(_))
    }

    /// Returns true if the status code or a header value was invalid.
    ///
    pub fn is_http(&self) -> bool {
        matches!(self.kind, ErrorKind::Http(_))
    }

    /// Returns true if the response target failed to accept bytes.
    ///
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }

    /// Returns true if a template failed partway through rendering.
    ///
    pub fn is_template(&self) -> bool {
        matches!(self.kind, ErrorKind::Template(_))
    }

    /// Returns the [`io::ErrorKind`] if this is an I/O error.
    ///
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match &self.kind {
            ErrorKind::Io(error) => Some(error.kind()),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.kind {
            ErrorKind::Encode(source) => write!(f, "failed to encode payload: {}", source),
            ErrorKind::Http(source) => Display::fmt(source, f),
            ErrorKind::Io(source) => write!(f, "failed to write response: {}", source),
            ErrorKind::Template(source) => write!(f, "failed to render template: {}", source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Encode(source) | ErrorKind::Template(source) => Some(&**source),
            ErrorKind::Http(source) => Some(source),
            ErrorKind::Io(source) => Some(source),
        }
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Self {
        Self {
            kind: ErrorKind::Io(error),
        }
    }
}

impl From<http::Error> for Error {
    fn from(error: http::Error) -> Self {
        Self {
            kind: ErrorKind::Http(error),
        }
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(error: http::header::InvalidHeaderValue) -> Self {
        Self::from(http::Error::from(error))
    }
}

impl From<http::status::InvalidStatusCode> for Error {
    fn from(error: http::status::InvalidStatusCode) -> Self {
        Self::from(http::Error::from(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::from(IoError::from(error))
        } else {
            Self::encode(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::Error;

    #[test]
    fn test_io_kind() {
        let error = Error::from(io::Error::from(io::ErrorKind::BrokenPipe));

        assert!(error.is_io());
        assert_eq!(error.io_kind(), Some(io::ErrorKind::BrokenPipe));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_status() {
        let error = match http::StatusCode::from_u16(1000) {
            Ok(_) => panic!("1000 should not be a valid status code"),
            Err(error) => Error::from(error),
        };

        assert!(error.is_http(), "expected an http error");
        assert!(!error.is_encode());
    }

    #[test]
    fn test_display_encode() {
        let error = Error::encode("key must be a string");

        assert!(error.is_encode());
        assert_eq!(
            error.to_string(),
            "failed to encode payload: key must be a string"
        );
    }
}
