use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The catalog backend failed an operation (enumeration, fetch, mutation).
    Catalog(String),
    /// The named object does not exist in the catalog.
    NotFound(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Catalog(msg) => write!(f, "catalog error: {msg}"),
            Error::NotFound(name) => write!(f, "object not found: {name}"),
            Error::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
