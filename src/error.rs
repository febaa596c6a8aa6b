use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Incompatible operand shapes (element-wise mismatch, bad product dims).
    Shape(String),
    /// Out-of-bounds element access.
    Index(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Shape(msg) => write!(f, "shape mismatch: {msg}"),
            Error::Index(msg) => write!(f, "index out of bounds: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
