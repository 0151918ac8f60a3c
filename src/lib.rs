mod ast;
mod engine;
mod error;
mod interface;
pub mod luhn;
mod parser;
mod random;
mod select;
mod template;

// Public exports.
pub use engine::PatternEngine;
pub use error::{MinifakeError, MinifakeResult, PatternError, PatternErrorKind};
pub use interface::{Options, PatternInterface};
pub use random::RandomSource;
pub use select::{maybe, pick_element, pick_key, shuffle};
pub use template::{
    DEFAULT_CREDIT_CARD_PATTERN, DEFAULT_SYMBOL, Dialect, MAX_REPEAT, Pattern, expand_credit_card_pattern,
    expand_digits, expand_pattern, expand_repetition,
};
