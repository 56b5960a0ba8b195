//! # funparse - Parser Combinator Engine
//!
//! A small library of composable parsers over string slices. Each parser
//! looks at the front of its input and either succeeds with a value and the
//! unconsumed rest of the input, or fails.
//!
//! - **Total**: a parse never panics; not matching is the `Failure` outcome
//! - **Pure**: parsers hold no state and can be run any number of times
//! - **Composable**: `bind` sequences, `alternate` chooses, `zero_or_more` and
//!   `one_or_more` repeat
//!
//! ```
//! use funparse::{AlternateExt, BindExt, ParseOutcome, character, integer, pure, run};
//!
//! // A signed integer: an optional '-' followed by digits
//! let signed = character('-')
//!     .bind(|_| integer().bind(|n| pure(-(n as i64))))
//!     .alternate(integer().bind(|n| pure(n as i64)));
//!
//! assert_eq!(run(&signed, "-12;"), ParseOutcome::success(-12, ";"));
//! assert_eq!(run(&signed, "7"), ParseOutcome::success(7, ""));
//! assert_eq!(run(&signed, "x"), ParseOutcome::failure());
//! ```

pub mod alternate;
pub mod ascii;
pub mod bind;
pub mod boxed;
pub mod char;
pub mod error;
pub mod fail;
pub mod from_fn;
pub mod literal;
pub mod map;
pub mod one_or_more;
pub mod outcome;
pub mod parser;
pub mod pure;
pub mod zero_or_more;

pub use alternate::{Alternate, AlternateExt, alternate};
pub use ascii::{BooleanParser, IntegerParser, boolean, digit, integer, is_decimal_digit};
pub use bind::{Bind, BindExt, bind};
pub use boxed::{BoxedExt, BoxedParser, boxed};
pub use char::{AnyChar, CharCond, IsChar, any_char, char_cond, character};
pub use error::OutcomeError;
pub use fail::{Fail, fail};
pub use from_fn::{FromFn, from_fn};
pub use literal::{Literal, literal};
pub use map::{Map, MapExt, map};
pub use one_or_more::{OneOrMore, one_or_more};
pub use outcome::ParseOutcome;
pub use parser::{Parser, run};
pub use pure::{Pure, pure};
pub use zero_or_more::{ZeroOrMore, zero_or_more};
