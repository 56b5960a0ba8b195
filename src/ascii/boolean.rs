use crate::alternate::{Alternate, AlternateExt};
use crate::literal::{Literal, literal};
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that matches `true` or `false`, trying `true` first
pub struct BooleanParser {
    choice: Alternate<Literal, Literal>,
}

impl<'code> Parser<'code> for BooleanParser {
    type Output = bool;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        self.choice.parse(input).map(|matched| matched == "true")
    }
}

/// Convenience function to create a BooleanParser
pub fn boolean() -> BooleanParser {
    BooleanParser {
        choice: literal("true").alternate(literal("false")),
    }
}
