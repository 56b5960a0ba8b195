use super::digit::digit;
use crate::one_or_more::one_or_more;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// Digits are read most significant first. A digit run too large for `u64`
/// fails like any other mismatch.
pub struct IntegerParser;

impl<'code> Parser<'code> for IntegerParser {
    type Output = u64;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (digits, remaining) = match one_or_more(digit()).parse(input) {
            ParseOutcome::Success { value, remaining } => (value, remaining),
            ParseOutcome::Failure => return ParseOutcome::failure(),
        };

        let value = digits.iter().try_fold(0u64, |acc, d| {
            acc.checked_mul(10)?
                .checked_add(u64::from(d.to_digit(10)?))
        });

        match value {
            Some(value) => ParseOutcome::success(value, remaining),
            None => {
                tracing::debug!(digits = digits.len(), "integer literal overflows u64");
                ParseOutcome::failure()
            }
        }
    }
}

/// Convenience function to create an IntegerParser
pub fn integer() -> IntegerParser {
    IntegerParser
}
