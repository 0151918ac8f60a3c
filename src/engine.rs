use rand::{SeedableRng, rngs::StdRng};

use crate::error::MinifakeResult;
use crate::interface::{Options, PatternInterface};
use crate::random::RandomSource;
use crate::select;
use crate::template::{
    expand_credit_card_pattern, expand_digits, expand_pattern, expand_repetition,
};

/// `PatternEngine` is the primary implementation of the `PatternInterface`
/// trait, bundling a random source with the engine options.
///
/// Each engine owns its generator, so independent engines never share state.
/// Seed one with [`PatternEngine::from_seed`] for reproducible output.
///
/// # Examples
///
/// ```
/// use minifake::{PatternEngine, PatternInterface, luhn};
///
/// let mut engine = PatternEngine::from_seed(42);
///
/// let card = engine.expand_credit_card(minifake::DEFAULT_CREDIT_CARD_PATTERN).unwrap();
/// assert!(card.starts_with("6453-"));
/// assert!(luhn::is_valid(&card));
///
/// let phone = engine.expand_digits("+1 (!##) !##-####");
/// assert_eq!(phone.len(), "+1 (555) 555-5555".len());
/// ```
#[derive(Debug, Clone)]
pub struct PatternEngine<R = StdRng> {
    rng: R,
    options: Options,
}

impl PatternEngine<StdRng> {
    /// Creates an engine whose output is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates an engine seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Default for PatternEngine<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: RandomSource> PatternEngine<R> {
    /// Creates an engine drawing from `rng` with default options.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            options: Options::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Gives direct access to the generator, e.g. to draw values the engine
    /// has no helper for. Draws made here advance the same stream.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// See [`crate::pick_element`].
    ///
    /// # Errors
    /// - If `items` is empty.
    pub fn pick_element<'s, T>(&mut self, items: &'s [T]) -> MinifakeResult<&'s T> {
        select::pick_element(items, &mut self.rng)
    }

    /// See [`crate::shuffle`].
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        select::shuffle(items, &mut self.rng);
    }

    /// See [`crate::pick_key`].
    ///
    /// # Errors
    /// - If the map is empty.
    pub fn pick_key<'m, K, V, M>(&mut self, map: M) -> MinifakeResult<&'m K>
    where
        K: 'm,
        V: 'm,
        M: IntoIterator<Item = (&'m K, &'m V)>,
        M::IntoIter: ExactSizeIterator,
    {
        select::pick_key(map, &mut self.rng)
    }

    /// See [`crate::maybe`].
    pub fn maybe<T: Default, F: FnOnce() -> T>(&mut self, probability: f64, producer: F) -> T {
        select::maybe(probability, producer, &mut self.rng)
    }
}

impl<R: RandomSource> PatternInterface for PatternEngine<R> {
    fn expand_digits<T: AsRef<str>>(&mut self, template: T) -> String {
        expand_digits(template.as_ref(), self.options.symbol, &mut self.rng)
    }

    fn expand_credit_card<T: AsRef<str>>(&mut self, template: T) -> MinifakeResult<String> {
        expand_credit_card_pattern(template.as_ref(), self.options.symbol, &mut self.rng)
    }

    fn expand_repetition<T: AsRef<str>>(&mut self, template: T) -> MinifakeResult<String> {
        expand_repetition(template.as_ref(), &mut self.rng)
    }

    fn expand_pattern<T: AsRef<str>>(&mut self, template: T) -> MinifakeResult<String> {
        expand_pattern(template.as_ref(), self.options.symbol, &mut self.rng)
    }
}
