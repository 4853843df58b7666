use thiserror::Error;

/// Errors returned when formatting or converting a `TimeSpan`.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("requested {requested} clock components, only {supported} are supported")]
    TooManyComponents { requested: usize, supported: usize },
    #[error("the span is negative")]
    Negative,
    #[error("the span is not finite")]
    NotFinite,
    #[error("the span is too large to represent")]
    Overflow,
}
