use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a generator run. No error is retried; any
/// failure stops the run so the two output files stay aligned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("case {case}: division by zero divisor")]
    DivisionByZero { case: u64 },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
