use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LoaderError {
    Http { status: u16 },
    Network(String),
    Io(String),
    Parse(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // This text ends up on the page verbatim.
            LoaderError::Http { status } => write!(f, "HTTP error! status: {status}"),
            LoaderError::Network(msg) => write!(f, "Network error: {msg}"),
            LoaderError::Io(msg) => write!(f, "Read error: {msg}"),
            LoaderError::Parse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for LoaderError {}
