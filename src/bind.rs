use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser combinator that sequences a parser with a continuation
///
/// The first parser runs on the input. If it fails, the continuation is never
/// called. Otherwise the continuation receives the produced value, returns the
/// next parser, and that parser runs on whatever the first one left behind.
///
/// Example:
/// ```
/// use funparse::{ParseOutcome, Parser, any_char, bind, character};
///
/// // Parse any character, then require that the same character follows
/// let doubled = bind(any_char(), character);
/// assert_eq!(doubled.parse("aab"), ParseOutcome::success('a', "b"));
/// assert_eq!(doubled.parse("abb"), ParseOutcome::failure());
/// ```
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        match self.parser.parse(input) {
            ParseOutcome::Success { value, remaining } => (self.continuation)(value).parse(remaining),
            ParseOutcome::Failure => ParseOutcome::failure(),
        }
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, continuation)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::BoxedExt;
    use crate::char::{any_char, character};
    use crate::fail::fail;
    use crate::pure::pure;
    use std::cell::Cell;

    #[test]
    fn test_bind_into_pure() {
        let parser = bind(any_char(), pure);
        assert_eq!(parser.parse("Test"), ParseOutcome::success('T', "est"));
    }

    #[test]
    fn test_bind_into_fail() {
        let parser = bind(any_char(), |_| fail::<char>());
        assert_eq!(parser.parse("Test"), ParseOutcome::failure());
    }

    #[test]
    fn test_bind_short_circuits() {
        let calls = Cell::new(0);
        let parser = bind(character('x'), |c| {
            calls.set(calls.get() + 1);
            pure(c)
        });

        assert_eq!(parser.parse("Test"), ParseOutcome::failure());
        assert_eq!(calls.get(), 0);

        assert_eq!(parser.parse("xy"), ParseOutcome::success('x', "y"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_bind_continuation_sees_remaining() {
        let parser = any_char().bind(|first| any_char().bind(move |second| pure((first, second))));
        assert_eq!(parser.parse("abc"), ParseOutcome::success(('a', 'b'), "c"));
        assert_eq!(parser.parse("a"), ParseOutcome::failure());
    }

    #[test]
    fn test_bind_branching_continuation() {
        let vowel = any_char().bind(|c| {
            if "aeiou".contains(c) {
                pure(c).boxed()
            } else {
                fail().boxed()
            }
        });

        assert_eq!(vowel.parse("ex"), ParseOutcome::success('e', "x"));
        assert_eq!(vowel.parse("xe"), ParseOutcome::failure());
    }
}
