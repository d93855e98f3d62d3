//! Error types for Herald
//!
//! Library code returns `HeraldError` built with `thiserror`; the binary wraps
//! these in `anyhow` with command-level context.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Herald operations
pub type HeraldResult<T> = Result<T, HeraldError>;

/// Main error type for Herald operations
#[derive(Error, Debug)]
pub enum HeraldError {
    /// A watcher constant is declared in a shape that cannot hold a watcher list
    #[error("constant '{name}' cannot be used as a watcher list: {reason}")]
    DeclarationShape { name: String, reason: String },

    /// The same watcher constant is declared twice in one source unit
    #[error("constant '{name}' is defined more than once")]
    DuplicateDefinition { name: String },

    /// A watcher reference names a constant that was not declared before it
    #[error("reference to undeclared watcher constant '{name}'")]
    UndefinedReference { name: String },

    /// The marker is present but its argument cannot be interpreted
    #[error("unsupported @{marker} argument on '{declaration}': {reason}")]
    UnsupportedArgumentShape {
        marker: String,
        declaration: String,
        reason: String,
    },

    /// A marked declaration (or its doc comment) carries no source position
    #[error("marked declaration '{name}' has no source position")]
    MissingPosition { name: String },

    /// A region was constructed without a watcher list
    #[error("watcher list for '{name}' is missing")]
    InvalidWatcherList { name: String },

    /// Span end precedes its start
    #[error("invalid span: end {end_line}:{end_column} precedes start {start_line}:{start_column}")]
    InvalidSpan {
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    },

    /// Source could not be parsed into a declaration tree
    #[error("syntax error in {unit} at line {line}, column {column}")]
    Syntax {
        unit: String,
        line: usize,
        column: usize,
    },

    /// The grammar could not be loaded or parsing was aborted
    #[error("parser unavailable: {0}")]
    ParserUnavailable(String),

    /// Revision content is not valid UTF-8
    #[error("content of {path} is not valid UTF-8")]
    InvalidEncoding { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git repository error
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// A notifier name that is not registered
    #[error("unknown notifier '{name}' (available: {available})")]
    UnknownNotifier { name: String, available: String },

    /// A notifier failed while handling a report
    #[error("notifier '{notifier}' failed: {message}")]
    Notifier { notifier: String, message: String },

    /// Path given to a walker does not exist
    #[error("path not found: {path}")]
    PathNotFound { path: PathBuf },
}
