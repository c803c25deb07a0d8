//! Spaceline carriers.
//!
//! The set of carriers is closed — a board only ever sells tickets for the
//! lines in [`Spaceline::CATALOG`]. Generation still takes the catalog as a
//! slice so tests (and future boards) can restrict or reorder it; an empty
//! slice is a configuration error at the generation seam, not here.

use mt_core::TicketRng;

/// A carrier operating Earth–Mars service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spaceline {
    VirginGalactic,
    SpaceX,
    SpaceAdventures,
}

impl Spaceline {
    /// Every carrier currently flying, in display order.
    pub const CATALOG: [Spaceline; 3] = [
        Spaceline::VirginGalactic,
        Spaceline::SpaceX,
        Spaceline::SpaceAdventures,
    ];

    /// Display name, as printed in the board's first column.
    pub fn as_str(self) -> &'static str {
        match self {
            Spaceline::VirginGalactic  => "Virgin Galactic",
            Spaceline::SpaceX          => "SpaceX",
            Spaceline::SpaceAdventures => "Space Adventures",
        }
    }

    /// Draw one carrier uniformly from `catalog`.
    /// Returns `None` if the catalog is empty.
    #[inline]
    pub fn pick(catalog: &[Spaceline], rng: &mut TicketRng) -> Option<Spaceline> {
        rng.choose(catalog).copied()
    }
}

impl std::fmt::Display for Spaceline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
