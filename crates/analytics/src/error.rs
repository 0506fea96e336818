use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A precondition on the input was violated (empty series, non-finite sample).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
