//! Error types for dialog construction.

use std::error::Error;
use std::fmt;
use std::io;

/// Why a [`FileDialog`](crate::dialog::FileDialog) could not be built.
#[derive(Debug)]
pub enum DialogError {
    /// The mode string was not one of the recognised modes.
    InvalidMode(String),
    /// The target directory could not be listed.
    Io(io::Error),
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMode(mode) => {
                write!(f, "unknown dialog mode {mode:?}, expected \"open\" or \"save\"")
            }
            Self::Io(err) => write!(f, "cannot list directory: {err}"),
        }
    }
}

impl Error for DialogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidMode(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for DialogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bad_mode() {
        let err = DialogError::InvalidMode("view".to_string());
        assert!(err.to_string().contains("\"view\""));
    }

    #[test]
    fn io_error_keeps_its_source() {
        let err = DialogError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
    }
}
