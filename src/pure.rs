use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that always succeeds without consuming input and returns a clone of its value
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        ParseOutcome::success(self.value.clone(), input)
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}
