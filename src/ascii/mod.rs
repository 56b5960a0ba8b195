pub mod boolean;
pub mod digit;
pub mod integer;

pub use boolean::{BooleanParser, boolean};
pub use digit::{digit, is_decimal_digit};
pub use integer::{IntegerParser, integer};
