use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Values are collected in the order their input was consumed.
pub struct ZeroOrMore<P> {
    parser: P,
}

impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore { parser }
    }
}

impl<'code, P> Parser<'code> for ZeroOrMore<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (results, remaining) = collect_repetitions(&self.parser, input);
        ParseOutcome::success(results, remaining)
    }
}

/// Apply `parser` until it fails, returning every value and the final remainder
///
/// A success that consumes nothing is kept and ends the repetition, since
/// applying the parser again would produce the same outcome forever.
pub(crate) fn collect_repetitions<'code, P>(
    parser: &P,
    mut input: &'code str,
) -> (Vec<P::Output>, &'code str)
where
    P: Parser<'code>,
{
    let mut results = Vec::new();

    while let ParseOutcome::Success { value, remaining } = parser.parse(input) {
        results.push(value);
        if remaining.len() == input.len() {
            tracing::debug!(
                count = results.len(),
                "repeated parser succeeded without consuming input, stopping"
            );
            break;
        }
        input = remaining;
    }

    tracing::trace!(count = results.len(), "repetition finished");
    (results, input)
}

/// Convenience function to create a ZeroOrMore parser
pub fn zero_or_more<'code, P>(parser: P) -> ZeroOrMore<P>
where
    P: Parser<'code>,
{
    ZeroOrMore::new(parser)
}
