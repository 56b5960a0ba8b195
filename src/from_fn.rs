use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// A parser backed by a plain function from input to outcome
pub struct FromFn<F> {
    f: F,
}

impl<F> FromFn<F> {
    pub fn new(f: F) -> Self {
        FromFn { f }
    }
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(&'code str) -> ParseOutcome<'code, T>,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        (self.f)(input)
    }
}

/// Lift a function into a parser
///
/// The function must only ever return suffixes of the string it was given as
/// the remainder.
pub fn from_fn<'code, F, T>(f: F) -> FromFn<F>
where
    F: Fn(&'code str) -> ParseOutcome<'code, T>,
{
    FromFn::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_success() {
        let parser = from_fn(|s| match s.strip_prefix("0x") {
            Some(rest) => ParseOutcome::success(16u32, rest),
            None => ParseOutcome::failure(),
        });

        assert_eq!(parser.parse("0xff"), ParseOutcome::success(16, "ff"));
        assert_eq!(parser.parse("ff"), ParseOutcome::failure());
    }

    #[test]
    fn test_from_fn_reusable() {
        let parser = from_fn(|s| ParseOutcome::success(s.len(), s));
        assert_eq!(parser.parse("abc"), parser.parse("abc"));
    }
}
