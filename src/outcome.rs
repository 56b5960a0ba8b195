use crate::error::OutcomeError;

/// Result of applying a parser to an input
///
/// On success the parser hands back the value it produced together with the
/// part of the input it did not consume. `remaining` borrows from the input the
/// parser was given, so it is always a suffix of that input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<'code, T> {
    Success { value: T, remaining: &'code str },
    Failure,
}

impl<'code, T> ParseOutcome<'code, T> {
    pub fn success(value: T, remaining: &'code str) -> Self {
        ParseOutcome::Success { value, remaining }
    }

    pub fn failure() -> Self {
        ParseOutcome::Failure
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ParseOutcome::Failure)
    }

    /// The produced value, or `InvalidState` if the parse failed
    pub fn value(&self) -> Result<&T, OutcomeError> {
        match self {
            ParseOutcome::Success { value, .. } => Ok(value),
            ParseOutcome::Failure => Err(OutcomeError::InvalidState { accessor: "value" }),
        }
    }

    /// The unconsumed input, or `InvalidState` if the parse failed
    pub fn remaining(&self) -> Result<&'code str, OutcomeError> {
        match self {
            ParseOutcome::Success { remaining, .. } => Ok(*remaining),
            ParseOutcome::Failure => Err(OutcomeError::InvalidState {
                accessor: "remaining",
            }),
        }
    }

    pub fn into_value(self) -> Result<T, OutcomeError> {
        match self {
            ParseOutcome::Success { value, .. } => Ok(value),
            ParseOutcome::Failure => Err(OutcomeError::InvalidState {
                accessor: "into_value",
            }),
        }
    }

    /// Splits a success into `(value, remaining)`; `None` on failure
    pub fn into_parts(self) -> Option<(T, &'code str)> {
        match self {
            ParseOutcome::Success { value, remaining } => Some((value, remaining)),
            ParseOutcome::Failure => None,
        }
    }

    /// Transform the value of a success, leaving the remainder untouched
    pub fn map<U, F>(self, f: F) -> ParseOutcome<'code, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ParseOutcome::Success { value, remaining } => ParseOutcome::Success {
                value: f(value),
                remaining,
            },
            ParseOutcome::Failure => ParseOutcome::Failure,
        }
    }

    /// Number of bytes of `input` consumed to reach this outcome
    ///
    /// `input` must be the string the producing parser was run on. Failures
    /// consumed nothing.
    pub fn consumed(&self, input: &str) -> usize {
        match self {
            ParseOutcome::Success { remaining, .. } => input.len() - remaining.len(),
            ParseOutcome::Failure => 0,
        }
    }
}
