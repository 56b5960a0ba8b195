use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that fails on every input
pub struct Fail<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new() -> Self {
        Fail {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Fail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _input: &'code str) -> ParseOutcome<'code, Self::Output> {
        ParseOutcome::failure()
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>() -> Fail<T> {
    Fail::new()
}
