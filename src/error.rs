use thiserror::Error;

/// Errors raised when a [`ParseOutcome`](crate::ParseOutcome) is used against its contract
///
/// These are programmer errors, not parse failures. An input that does not
/// parse is reported as [`ParseOutcome::Failure`](crate::ParseOutcome::Failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// An accessor that only makes sense on `Success` was called on `Failure`
    #[error("cannot read `{accessor}` of a failed parse outcome")]
    InvalidState { accessor: &'static str },
}
