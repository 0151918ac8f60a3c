use rand::Rng;
use rand::distr::uniform::SampleUniform;

/// `RandomSource` is the only collaborator the expanders draw from.
///
/// Every [`rand::Rng`] is a `RandomSource`, so a seeded `StdRng` can be handed
/// straight to any expansion function. Implement it by hand to script draws in
/// tests.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn uniform_int<T>(&mut self, low: T, high: T) -> T
    where
        T: SampleUniform + PartialOrd;

    /// Returns `true` with the given probability.
    ///
    /// Probabilities outside `[0, 1]` are clamped, NaN counts as `0`.
    fn uniform_bool(&mut self, probability: f64) -> bool;
}

impl<R: Rng> RandomSource for R {
    fn uniform_int<T>(&mut self, low: T, high: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.random_range(low..=high)
    }

    fn uniform_bool(&mut self, probability: f64) -> bool {
        self.random_bool(clamp_probability(probability))
    }
}

pub(crate) fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

/// Draws a single ASCII digit in `[low, 9]`.
pub(crate) fn digit<R: RandomSource>(rng: &mut R, low: u8) -> char {
    char::from(b'0'.saturating_add(rng.uniform_int(low, 9)))
}
