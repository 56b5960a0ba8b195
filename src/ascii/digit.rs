use crate::char::{CharCond, char_cond};

/// True exactly for the ASCII decimal digits `'0'..='9'`
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> CharCond<fn(char) -> bool> {
    char_cond(is_decimal_digit as fn(char) -> bool)
}
