use std::error;
use std::fmt;

/// The result type returned by the codec.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced while decoding or serializing a header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

impl Error {
    pub(crate) fn new<S: Into<String>>(kind: ErrorKind, msg: S) -> Self {
        Self {
            kind,
            msg: msg.into(),
        }
    }

    /// The category of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// A human readable description.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::TruncatedInput => write!(f, "truncated input: {}", self.msg),
            ErrorKind::LengthMismatch => write!(f, "length mismatch: {}", self.msg),
            ErrorKind::UnsupportedRoutingType(t) => {
                write!(f, "unsupported routing type {}: {}", t, self.msg)
            }
            ErrorKind::InsufficientHeadroom => write!(f, "insufficient headroom: {}", self.msg),
            ErrorKind::UnknownProtocol(p) => {
                write!(f, "no decoder for protocol {}: {}", p, self.msg)
            }
        }
    }
}

impl error::Error for Error {}

/// Categories of codec errors.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    /// The buffer is shorter than the current parse step requires.
    TruncatedInput,
    /// A length field disagrees with the number of available octets.
    LengthMismatch,
    /// The routing type is neither 0 nor 4.
    UnsupportedRoutingType(u8),
    /// The output buffer has no room in front to prepend the header.
    InsufficientHeadroom,
    /// No decoder is registered for the protocol number.
    UnknownProtocol(u8),
}
