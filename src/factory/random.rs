//! Random identifier generation.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random `[A-Za-z0-9]` string of exactly `len` characters.
///
/// Uniqueness is best-effort: at the lengths tests use, collisions are
/// possible but negligible.
pub fn gen_random_str(len: usize) -> String {
    gen_random_str_with(&mut rand::thread_rng(), len)
}

/// Same as [`gen_random_str`], drawing from the supplied RNG.
pub fn gen_random_str_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let id: String = (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    tracing::trace!(len, id = %id, "Generated random identifier");
    id
}
