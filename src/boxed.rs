use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// A type-erased parser
///
/// Useful when parsers of different concrete types have to be returned from
/// the same place, such as both arms of a `bind` continuation.
pub struct BoxedParser<'code, T> {
    inner: Box<dyn Parser<'code, Output = T> + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + 'code,
    {
        BoxedParser {
            inner: Box::new(parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        self.inner.parse(input)
    }
}

/// Convenience function to box a parser
pub fn boxed<'code, P>(parser: P) -> BoxedParser<'code, P::Output>
where
    P: Parser<'code> + 'code,
{
    BoxedParser::new(parser)
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers that outlive the input
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
