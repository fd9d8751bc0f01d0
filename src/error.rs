//! Crate-wide error type.
use std::{fmt, io};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A [`crate::config::Config`] that cannot describe a playable canvas.
    Config(&'static str),
    /// Writing to or reading from the terminal failed.
    Io(io::Error),
    /// An image asset could not be decoded.
    #[cfg(feature = "images")]
    Image(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(reason) => write!(f, "invalid configuration: {reason}"),
            Error::Io(e) => write!(f, "terminal error: {e}"),
            #[cfg(feature = "images")]
            Error::Image(e) => write!(f, "image error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(_) => None,
            Error::Io(e) => Some(e),
            #[cfg(feature = "images")]
            Error::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(feature = "images")]
impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}
