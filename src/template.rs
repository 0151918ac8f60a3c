use crate::ast::{Node, RepeatCount};
use crate::error::MinifakeResult;
use crate::luhn;
use crate::parser::tokenize;
use crate::random::{RandomSource, digit};

/// The placeholder replaced by a random digit unless another is configured.
pub const DEFAULT_SYMBOL: char = '#';

/// A 16 digit card number, the last digit being the Luhn check digit.
pub const DEFAULT_CREDIT_CARD_PATTERN: &str = "6453-####-####-####-###L";

/// The largest count a `{n}` or `{min,max}` repeat may ask for.
pub const MAX_REPEAT: u64 = 10_000;

/// Selects which tokens a [`Pattern`] recognizes.
///
/// `[min-max]` ranges and `c{n}` / `c{min,max}` repeats are understood by
/// every dialect.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Placeholders, `!`, the `L` Luhn marker and strictly validated ranges.
    CreditCard,
    /// Only repeats and ranges; placeholders are ordinary characters.
    Repetition,
    /// Repeats, ranges and placeholders, with repeated placeholders drawn
    /// independently for every copy.
    Full,
}

impl Dialect {
    pub(crate) const fn has_placeholders(self) -> bool {
        match self {
            Self::CreditCard | Self::Full => true,
            Self::Repetition => false,
        }
    }

    pub(crate) const fn has_luhn_marker(self) -> bool {
        match self {
            Self::CreditCard => true,
            Self::Repetition | Self::Full => false,
        }
    }

    /// Strict dialects reject a closed `[...]` that is not `[min-max]`
    /// instead of keeping it as text.
    pub(crate) const fn has_strict_ranges(self) -> bool {
        match self {
            Self::CreditCard => true,
            Self::Repetition | Self::Full => false,
        }
    }
}

/// A Pattern is a parsed template that can be expanded any number of times.
///
/// Parsing validates the template once; rendering only draws random values and
/// cannot fail.
///
/// # Example
///
/// ```rust
/// use minifake::{Dialect, Pattern};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let pattern = Pattern::parse("ID-[100-999]-#{4}", Dialect::Full, '#').unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let id = pattern.render(&mut rng);
/// assert_eq!(id.len(), "ID-123-4567".len());
/// assert!(id.starts_with("ID-"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    nodes: Vec<Node<'a>>,
    dialect: Dialect,
}

impl<'a> Pattern<'a> {
    /// Parses `template` in the given dialect, with `symbol` as the digit
    /// placeholder.
    ///
    /// # Errors
    ///
    /// Returns a `MinifakeError::InvalidPattern` error if a range or repeat
    /// token has inverted bounds, if a repeat count exceeds [`MAX_REPEAT`], or
    /// if a credit card range is malformed.
    pub fn parse(template: &'a str, dialect: Dialect, symbol: char) -> MinifakeResult<Self> {
        log::trace!("parsing {:?} pattern {:?}", dialect, template);

        let nodes = tokenize(template, dialect, symbol).inspect_err(|e| {
            log::debug!("rejected pattern {:?}: {}", template, e);
        })?;

        Ok(Self { nodes, dialect })
    }

    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Expands the pattern into a literal string, drawing from `rng`.
    pub fn render<R: RandomSource>(&self, rng: &mut R) -> String {
        let mut output = String::new();
        let mut digits = Vec::new();
        for node in &self.nodes {
            render_node(node, rng, &mut output, &mut digits);
        }
        output
    }
}

/// Appends the expansion of `node` to `output`.
///
/// `digits` collects every decimal digit written so far, literal or random, so
/// that a Luhn marker can checksum the whole number before it.
fn render_node<R: RandomSource>(
    node: &Node<'_>,
    rng: &mut R,
    output: &mut String,
    digits: &mut Vec<u8>,
) {
    match node {
        Node::Literal { data } => {
            output.push_str(data);
            record_digits(data, digits);
        }
        Node::Digit => push_digit(digit(rng, 0), output, digits),
        Node::NonZeroDigit => push_digit(digit(rng, 2), output, digits),
        Node::Luhn => {
            let check = luhn::check_digit(digits);
            push_digit(char::from(b'0'.saturating_add(check)), output, digits);
        }
        Node::Range { min, max } => {
            let value = rng.uniform_int(*min, *max).to_string();
            output.push_str(&value);
            record_digits(&value, digits);
        }
        Node::Repeat { subject, count } => {
            let times = match *count {
                RepeatCount::Exact(n) => n,
                RepeatCount::Between { min, max } => rng.uniform_int(min, max),
            };
            for _ in 0..times {
                render_node(subject, rng, output, digits);
            }
        }
    }
}

fn push_digit(c: char, output: &mut String, digits: &mut Vec<u8>) {
    output.push(c);
    record_digits(c.encode_utf8(&mut [0; 4]), digits);
}

fn record_digits(text: &str, digits: &mut Vec<u8>) {
    digits.extend(
        text.bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b.saturating_sub(b'0')),
    );
}

/// Replaces every `symbol` with a random digit `0`-`9` and every `!` with a
/// random digit `2`-`9`. All other characters are kept.
///
/// The output always has as many characters as the template.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let pin = minifake::expand_digits("Your pin is: !###", '#', &mut rng);
/// assert!(pin.starts_with("Your pin is: "));
/// assert!(!pin.contains('#') && !pin.contains('!'));
/// ```
pub fn expand_digits<R: RandomSource>(template: &str, symbol: char, rng: &mut R) -> String {
    template
        .chars()
        .map(|c| {
            if c == symbol {
                digit(rng, 0)
            } else if c == '!' {
                digit(rng, 2)
            } else {
                c
            }
        })
        .collect()
}

/// Expands a credit card template: `[min-max]` ranges, `symbol` and `!`
/// placeholders, repeats, and an `L` which becomes the Luhn check digit of
/// every digit before it.
///
/// # Errors
///
/// Returns `MinifakeError::InvalidPattern` for inverted bounds or a bracketed
/// range which is not `[min-max]`.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let card = minifake::expand_credit_card_pattern("1234-[4-9]-##!!-L", '#', &mut rng).unwrap();
/// assert!(minifake::luhn::is_valid(&card));
/// ```
pub fn expand_credit_card_pattern<R: RandomSource>(
    template: &str,
    symbol: char,
    rng: &mut R,
) -> MinifakeResult<String> {
    Ok(Pattern::parse(template, Dialect::CreditCard, symbol)?.render(rng))
}

/// Expands `c{n}`, `c{min,max}` and `[min-max]` tokens, treating every other
/// character, placeholders included, as text.
///
/// # Errors
///
/// Returns `MinifakeError::InvalidPattern` if a range or repeat has its lower
/// bound above its upper bound.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// assert_eq!(minifake::expand_repetition("#{5}", &mut rng).unwrap(), "#####");
/// ```
pub fn expand_repetition<R: RandomSource>(template: &str, rng: &mut R) -> MinifakeResult<String> {
    Ok(Pattern::parse(template, Dialect::Repetition, DEFAULT_SYMBOL)?.render(rng))
}

/// Expands repeats, ranges and digit placeholders in one pass. Every copy of a
/// repeated placeholder is drawn independently.
///
/// # Errors
///
/// Returns `MinifakeError::InvalidPattern` if a range or repeat has its lower
/// bound above its upper bound.
pub fn expand_pattern<R: RandomSource>(
    template: &str,
    symbol: char,
    rng: &mut R,
) -> MinifakeResult<String> {
    Ok(Pattern::parse(template, Dialect::Full, symbol)?.render(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Always draws the lower bound.
    struct Lowest;

    impl RandomSource for Lowest {
        fn uniform_int<T>(&mut self, low: T, _high: T) -> T
        where
            T: rand::distr::uniform::SampleUniform + PartialOrd,
        {
            low
        }

        fn uniform_bool(&mut self, probability: f64) -> bool {
            probability >= 1.0
        }
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_render_with_lowest_draws() {
        let pattern = Pattern::parse("1234-[4-9]-##!!-L", Dialect::CreditCard, '#').unwrap();
        // Digits 1 2 3 4 4 0 0 2 2 give a check digit of 2.
        assert_eq!(pattern.render(&mut Lowest), "1234-4-0022-2");
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_luhn_counts_range_digits() {
        let pattern = Pattern::parse("[15-15]L", Dialect::CreditCard, '#').unwrap();
        // 1 5 -> 5 doubled is 10 -> 1, sum 2, check 8.
        assert_eq!(pattern.render(&mut Lowest), "158");
        assert!(luhn::is_valid("158"));
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_second_luhn_marker_includes_first() {
        let pattern = Pattern::parse("1L L", Dialect::CreditCard, '#').unwrap();
        let output = pattern.render(&mut Lowest);
        assert_eq!(output, "18 2");
        assert!(luhn::is_valid(&output));
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_repeated_placeholder_draws_each_copy() {
        let mut rng = StdRng::seed_from_u64(99);
        let pattern = Pattern::parse("#{64}", Dialect::Full, '#').unwrap();
        let output = pattern.render(&mut rng);
        assert_eq!(output.len(), 64);
        assert!(output.bytes().all(|b| b.is_ascii_digit()));
        let first = output.as_bytes().first().copied();
        assert!(
            output.bytes().any(|b| Some(b) != first),
            "64 draws should not all be equal: {output}"
        );
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_zero_repeat_removes_subject() {
        assert_eq!(expand_repetition("ab{0}c", &mut Lowest).unwrap(), "ac");
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_pattern_can_be_rendered_repeatedly() {
        let mut rng = StdRng::seed_from_u64(5);
        let pattern = Pattern::parse("[1-6]", Dialect::Repetition, '#').unwrap();
        assert_eq!(pattern.dialect(), Dialect::Repetition);
        for _ in 0..50 {
            let value: u64 = pattern.render(&mut rng).parse().unwrap();
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_expand_digits_symbol_takes_precedence_over_bang() {
        let mut rng = StdRng::seed_from_u64(8);
        let output = expand_digits("!!!!!!!!!!!!!!!!!!!!", '!', &mut rng);
        assert_eq!(output.len(), 20);
        assert!(output.bytes().all(|b| b.is_ascii_digit()));
    }
}
