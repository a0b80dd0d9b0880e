use std::fmt;

/// The three failure classes a caller can tell apart. All of them end the
/// invocation with a non-zero exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing arguments, found before any file access.
    Usage,
    /// Well-formed arguments outside the allowed domain.
    Validation,
    /// Open, seek, read or output failure after validation passed.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Usage => write!(f, "usage"),
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Io => write!(f, "io"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("--start must be >= 0, got {0}")]
    NegativeStart(i64),

    #[error("--size must be > 0, got {0}")]
    NonPositiveSize(i64),

    #[error(transparent)]
    File(#[from] slice_fs::Error),

    #[error("{0:#}")]
    Read(anyhow::Error),

    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage(_) => ErrorKind::Usage,
            Error::NegativeStart(_)
            | Error::NonPositiveSize(_)
            | Error::File(_) => ErrorKind::Validation,
            Error::Read(_) | Error::Write(_) => ErrorKind::Io,
        }
    }
}

impl From<clap::Error> for Error {
    fn from(error: clap::Error) -> Self {
        let rendered = error.to_string();
        let message = rendered.trim_start_matches("error: ").trim_end();
        Error::Usage(message.to_string())
    }
}
