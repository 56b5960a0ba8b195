use crate::outcome::ParseOutcome;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to consume a prefix of `input`
    ///
    /// Returns `Success` with the produced value and the unconsumed suffix of
    /// `input`, or `Failure`. Parsers hold no state between calls: parsing the
    /// same input twice yields equal outcomes.
    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        (**self).parse(input)
    }
}

/// Evaluate `parser` against `input`
pub fn run<'code, P>(parser: &P, input: &'code str) -> ParseOutcome<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    let outcome = parser.parse(input);
    tracing::trace!(
        input_len = input.len(),
        consumed = outcome.consumed(input),
        success = outcome.is_success(),
        "parser run finished"
    );
    outcome
}
