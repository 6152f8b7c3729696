use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Nothing drawn on the canvas")]
    EmptyDrawing,

    #[error("Classifier unreachable: {0}")]
    ClassifierUnreachable(String),

    #[error("Invalid canvas dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Bounding box ({x1}, {y1}) - ({x2}, {y2}) lies outside the canvas")]
    InvalidBoundingBox { x1: i64, y1: i64, x2: i64, y2: i64 },

    #[error("Invalid line width: {0}")]
    InvalidLineWidth(f64),

    #[error("Invalid pixel buffer length: expected {expected} bytes, got {actual}")]
    InvalidBufferLength { expected: usize, actual: usize },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode canvas image: {0}")]
    DecodeError(String),

    #[error("Failed to encode debug image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
