//! Nanoid-style row identifiers.
//!
//! An identifier is `size` symbols drawn independently and uniformly (with replacement) from the
//! 64-symbol URL-safe [`ALPHABET`]. The random source is supplied by the caller, so runs can be
//! made reproducible with a seeded generator. Uniqueness is not checked.

use rand::Rng;

/// URL-safe identifier alphabet: `A-Z`, `a-z`, `0-9`, `_` and `-`.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Default identifier length.
pub const DEFAULT_SIZE: usize = 21;

/// Generate one identifier of `size` symbols using `rng`.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, size: usize) -> String {
    (0..size)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

/// `true` if `id` has exactly `size` symbols, all taken from [`ALPHABET`].
pub fn is_valid_id(id: &str, size: usize) -> bool {
    id.len() == size && id.bytes().all(|b| ALPHABET.contains(&b))
}
