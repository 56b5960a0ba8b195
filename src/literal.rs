use crate::char::character;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// The whole expected string must match. On success the matched prefix is
/// returned and the rest of the input is left unconsumed. An empty expected
/// string always succeeds without consuming anything.
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = String;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let mut remaining = input;

        for expected_char in self.expected.chars() {
            match character(expected_char).parse(remaining) {
                ParseOutcome::Success { remaining: rest, .. } => remaining = rest,
                ParseOutcome::Failure => return ParseOutcome::failure(),
            }
        }

        let matched = &input[..input.len() - remaining.len()];
        ParseOutcome::success(matched.to_string(), remaining)
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
