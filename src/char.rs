use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that consumes and returns a single character
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let mut chars = input.chars();
        match chars.next() {
            Some(ch) => ParseOutcome::success(ch, chars.as_str()),
            None => ParseOutcome::failure(),
        }
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that consumes a single character accepted by a predicate
///
/// Equivalent to binding [`any_char`] to a continuation that returns the
/// character when the predicate holds and fails otherwise.
pub struct CharCond<F> {
    predicate: F,
}

impl<F> CharCond<F> {
    pub fn new(predicate: F) -> Self {
        CharCond { predicate }
    }
}

impl<'code, F> Parser<'code> for CharCond<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        match AnyChar.parse(input) {
            ParseOutcome::Success { value, remaining } if (self.predicate)(value) => {
                ParseOutcome::success(value, remaining)
            }
            _ => ParseOutcome::failure(),
        }
    }
}

/// Convenience function to create a CharCond parser
pub fn char_cond<F>(predicate: F) -> CharCond<F>
where
    F: Fn(char) -> bool,
{
    CharCond::new(predicate)
}

/// Parser that matches a specific character
pub struct IsChar(char);

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        char_cond(|ch| ch == self.0).parse(input)
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn character(expected: char) -> IsChar {
    IsChar(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_char_ascii() {
        let parser = any_char();
        assert_eq!(parser.parse("Test"), ParseOutcome::success('T', "est"));
    }

    #[test]
    fn test_any_char_empty() {
        assert_eq!(any_char().parse(""), ParseOutcome::failure());
    }

    #[test]
    fn test_any_char_consumes_whole_codepoint() {
        let parser = any_char();
        assert_eq!(parser.parse("åäö"), ParseOutcome::success('å', "äö"));
        assert_eq!(parser.parse("🦀!"), ParseOutcome::success('🦀', "!"));
    }

    #[test]
    fn test_any_char_sequential() {
        let parser = any_char();
        let (first, rest) = parser.parse("café").into_parts().unwrap();
        let (second, rest) = parser.parse(rest).into_parts().unwrap();
        let (third, rest) = parser.parse(rest).into_parts().unwrap();
        let (fourth, rest) = parser.parse(rest).into_parts().unwrap();
        assert_eq!([first, second, third, fourth], ['c', 'a', 'f', 'é']);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_char_cond_accepts() {
        let parser = char_cond(|c| c == 'T');
        assert_eq!(parser.parse("Test"), ParseOutcome::success('T', "est"));
    }

    #[test]
    fn test_char_cond_rejects() {
        let parser = char_cond(|c| c == 'T');
        assert_eq!(parser.parse("PF"), ParseOutcome::failure());
        assert_eq!(parser.parse(""), ParseOutcome::failure());
    }

    #[test]
    fn test_char_cond_unicode_predicates() {
        let test_cases = [
            ("a", true),
            ("Z", true),
            ("ñ", true),
            ("中", true),
            ("1", false),
            ("!", false),
            (" ", false),
        ];

        let parser = char_cond(|c: char| c.is_alphabetic());
        for (input, should_succeed) in test_cases {
            assert_eq!(
                parser.parse(input).is_success(),
                should_succeed,
                "Unexpected outcome for: {}",
                input
            );
        }
    }

    #[test]
    fn test_character_match() {
        let parser = character('T');
        assert_eq!(parser.parse("Test"), ParseOutcome::success('T', "est"));
    }

    #[test]
    fn test_character_mismatch() {
        let parser = character('T');
        assert_eq!(parser.parse("PF"), ParseOutcome::failure());
        assert_eq!(parser.parse("test"), ParseOutcome::failure());
    }
}
