use miette::Diagnostic;
use thiserror::Error;

/// Main error type for emosaic operations
#[derive(Error, Diagnostic, Debug)]
pub enum MosaicError {
    #[error("IO error: {0}")]
    #[diagnostic(code(emosaic::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(emosaic::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(emosaic::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Division by zero while {context}")]
    #[diagnostic(code(emosaic::divide_by_zero))]
    DivideByZero {
        context: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(emosaic::invalid_argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Tile store has {len} entries, at least {minimum} are needed for matching")]
    #[diagnostic(
        code(emosaic::store_too_small),
        help("Add more tiles to the library and re-run `emosaic index`")
    )]
    StoreTooSmall { len: usize, minimum: usize },

    #[error("Tile '{id}' is in the dictionary but not in the tile library")]
    #[diagnostic(
        code(emosaic::missing_tile),
        help("The dictionary is stale; re-run `emosaic index`")
    )]
    MissingTile { id: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(emosaic::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MosaicError>;
