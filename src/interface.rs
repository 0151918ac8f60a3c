use crate::template::DEFAULT_SYMBOL;

/// Engine configuration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Options {
    /// The character replaced by a random digit `0`-`9`.
    pub symbol: char,
}

impl Options {
    pub const fn new() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL,
        }
    }

    #[must_use]
    pub const fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

/// `PatternInterface` is the expansion surface of the Minifake engine, an
/// opinionated and minimalistic generator of fake but well-formed strings
/// for tests and fixtures.
///
/// Implementors own their random source, so every call advances it.
pub trait PatternInterface {
    /// `expand_digits` replaces the configured symbol with digits `0`-`9` and
    /// `!` with digits `2`-`9`.
    fn expand_digits<T: AsRef<str>>(&mut self, template: T) -> String;

    /// `expand_credit_card` expands a card template, filling `L` with the Luhn
    /// check digit.
    ///
    /// # Errors
    /// - If a range or repeat has inverted bounds.
    /// - If a bracketed range is not of the form `[min-max]`.
    fn expand_credit_card<T: AsRef<str>>(&mut self, template: T) -> crate::MinifakeResult<String>;

    /// `expand_repetition` expands `c{n}`, `c{min,max}` and `[min-max]`
    /// tokens, keeping placeholders as text.
    ///
    /// # Errors
    /// - If a range or repeat has inverted bounds.
    fn expand_repetition<T: AsRef<str>>(&mut self, template: T) -> crate::MinifakeResult<String>;

    /// `expand_pattern` expands repeats, ranges and placeholders together.
    ///
    /// # Errors
    /// - If a range or repeat has inverted bounds.
    fn expand_pattern<T: AsRef<str>>(&mut self, template: T) -> crate::MinifakeResult<String>;
}
