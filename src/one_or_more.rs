use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::zero_or_more::collect_repetitions;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Fails only when the first application of the inner parser fails.
pub struct OneOrMore<P> {
    parser: P,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore { parser }
    }
}

impl<'code, P> Parser<'code> for OneOrMore<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (results, remaining) = collect_repetitions(&self.parser, input);
        if results.is_empty() {
            ParseOutcome::failure()
        } else {
            ParseOutcome::success(results, remaining)
        }
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<'code, P>(parser: P) -> OneOrMore<P>
where
    P: Parser<'code>,
{
    OneOrMore::new(parser)
}
