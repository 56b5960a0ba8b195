use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the original input; nothing the first
/// parser looked at before failing is kept.
pub struct Alternate<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Alternate<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Alternate { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Alternate<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        match self.parser1.parse(input) {
            ParseOutcome::Failure => self.parser2.parse(input),
            success => success,
        }
    }
}

/// Extension trait to add .alternate() method support for parsers
pub trait AlternateExt<'code>: Parser<'code> + Sized {
    fn alternate<P>(self, other: P) -> Alternate<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Alternate::new(self, other)
    }
}

/// Implement AlternateExt for all parsers
impl<'code, P> AlternateExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Alternate parser
pub fn alternate<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Alternate<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Alternate::new(parser1, parser2)
}
