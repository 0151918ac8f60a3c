//! Random selection helpers over slices and maps.

use crate::error::{MinifakeError, MinifakeResult};
use crate::random::RandomSource;

/// Returns a uniformly chosen element of `items`.
///
/// # Errors
///
/// Returns `MinifakeError::EmptyInput` if `items` is empty. No value is drawn
/// from `rng` in that case.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let colour = minifake::pick_element(&["red", "green", "blue"], &mut rng).unwrap();
/// assert!(["red", "green", "blue"].contains(colour));
/// ```
pub fn pick_element<'s, T, R: RandomSource>(items: &'s [T], rng: &mut R) -> MinifakeResult<&'s T> {
    let last = items
        .len()
        .checked_sub(1)
        .ok_or_else(|| MinifakeError::empty_input("pick an element"))?;

    items
        .get(rng.uniform_int(0, last))
        .ok_or_else(|| MinifakeError::empty_input("pick an element"))
}

/// Shuffles `items` in place (Fisher-Yates).
pub fn shuffle<T, R: RandomSource>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.uniform_int(0, i);
        items.swap(i, j);
    }
}

/// Returns a uniformly chosen key of a map.
///
/// Accepts anything iterating over `(&K, &V)` pairs with a known length, such
/// as `&HashMap<K, V>` or `&BTreeMap<K, V>`.
///
/// # Errors
///
/// Returns `MinifakeError::EmptyInput` if the map is empty. No value is drawn
/// from `rng` in that case.
///
/// ```
/// use std::collections::BTreeMap;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let map = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let key = minifake::pick_key(&map, &mut rng).unwrap();
/// assert!(map.contains_key(key));
/// ```
pub fn pick_key<'m, K, V, M, R>(map: M, rng: &mut R) -> MinifakeResult<&'m K>
where
    K: 'm,
    V: 'm,
    M: IntoIterator<Item = (&'m K, &'m V)>,
    M::IntoIter: ExactSizeIterator,
    R: RandomSource,
{
    let mut entries = map.into_iter();
    let last = entries
        .len()
        .checked_sub(1)
        .ok_or_else(|| MinifakeError::empty_input("pick a key"))?;

    entries
        .nth(rng.uniform_int(0, last))
        .map(|(key, _)| key)
        .ok_or_else(|| MinifakeError::empty_input("pick a key"))
}

/// Calls `producer` with the given probability, otherwise returns
/// `T::default()`.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(minifake::maybe(1.0, || 42, &mut rng), 42);
/// assert_eq!(minifake::maybe(0.0, || 42, &mut rng), 0);
/// ```
pub fn maybe<T, F, R>(probability: f64, producer: F, rng: &mut R) -> T
where
    T: Default,
    F: FnOnce() -> T,
    R: RandomSource,
{
    if rng.uniform_bool(probability) {
        producer()
    } else {
        T::default()
    }
}
