use gutter_style::StyleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GutterError {
    #[error("Spacing configuration error: {0}")]
    Style(#[from] StyleError),

    #[error("Invalid grid: {rows} rows x {cols} columns (both must be at least 1)")]
    InvalidGrid { rows: usize, cols: usize },

    #[error("Invalid span: {row_span} rows x {col_span} columns (both must be at least 1)")]
    InvalidSpan { row_span: usize, col_span: usize },

    #[error("Offset {side} = {value} does not fit in an i32")]
    OffsetOverflow { side: &'static str, value: i64 },

    #[error("List surface has no arrangement")]
    MissingArrangement,

    #[error("Unsupported arrangement: {0}")]
    UnsupportedArrangement(String),

    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A logger was already installed")]
    LoggerAlreadySet,
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, GutterError>;
