use thiserror::Error;

/// Errors raised while scanning a streamed line source.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Reading a line from the input failed.
    #[error("failed to read input line: {0}")]
    Io(#[from] std::io::Error),
}
