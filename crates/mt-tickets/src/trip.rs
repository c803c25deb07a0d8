//! Trip types.

use mt_core::TicketRng;

/// Whether a ticket covers the return leg.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TripType {
    RoundTrip,
    OneWay,
}

impl TripType {
    /// Both trip types, in display order.
    pub const ALL: [TripType; 2] = [TripType::RoundTrip, TripType::OneWay];

    /// Display name, as printed in the board's third column.
    pub fn as_str(self) -> &'static str {
        match self {
            TripType::RoundTrip => "Round-trip",
            TripType::OneWay    => "One-way",
        }
    }

    /// Draw one trip type uniformly, independent of every other draw.
    #[inline]
    pub fn pick(rng: &mut TicketRng) -> TripType {
        // ALL is non-empty by construction, so choose cannot return None.
        *rng.choose(&Self::ALL).unwrap_or(&TripType::RoundTrip)
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
