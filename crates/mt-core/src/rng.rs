//! Deterministic RNG wrapper.
//!
//! # Determinism strategy
//!
//! The board consumes randomness from exactly one `TicketRng`, passed
//! explicitly through the call chain — there is no process-global source.
//! Because ticket generation draws in a fixed order, a run seeded with
//! [`TicketRng::new`] is byte-for-byte reproducible; [`TicketRng::from_entropy`]
//! gives the interactive "fresh board every run" behavior.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The board's single pseudo-random source.
///
/// A thin wrapper over `SmallRng` — not cryptographic, which is fine for a
/// fictional pricing table. Holding the concrete type (rather than
/// `impl Rng` everywhere) keeps call sites monomorphic and seeds explicit.
pub struct TicketRng(SmallRng);

impl TicketRng {
    /// Seed deterministically. The same seed always produces the same board.
    pub fn new(seed: u64) -> Self {
        TicketRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy for non-reproducible interactive runs.
    pub fn from_entropy() -> Self {
        TicketRng(SmallRng::from_entropy())
    }

    /// One uniform draw in `[0, 1)` — the "random factor" that fare quoting
    /// interpolates into both the speed and cost bands.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
