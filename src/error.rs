use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bks operations
#[derive(Error, Diagnostic, Debug)]
pub enum BksError {
    #[error("IO error: {0}")]
    #[diagnostic(code(bks::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bks::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bks::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(bks::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BksError>;
