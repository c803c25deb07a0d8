//! Fare quoting.
//!
//! # The speed/cost correlation
//!
//! A quote draws ONE uniform factor `r ∈ [0, 1)` and interpolates it into
//! both the cruise-speed band and the fare band:
//!
//!   speed = min_speed + r * (max_speed - min_speed)
//!   cost  = min_cost  + r * (max_cost  - min_cost)
//!
//! A faster ship therefore always costs more within a ticket. The pairing
//! is part of the board's observable behavior, so both values come out of
//! one function as one struct; drawing them independently would silently
//! change the output distribution.

use mt_core::{BoardConfig, TicketRng};

/// One priced speed offer: how fast the ship cruises, and what that costs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FareQuote {
    /// Cruise speed in km/s. In `[min_speed_kms, max_speed_kms)`.
    pub speed_kms: f64,
    /// Fare in millions of currency units. In `[min_cost_millions, max_cost_millions)`.
    pub cost_millions: f64,
}

impl FareQuote {
    /// Draw one quote from the config's speed and fare bands.
    pub fn draw(cfg: &BoardConfig, rng: &mut TicketRng) -> FareQuote {
        let r = rng.unit();

        let speed_span = cfg.max_speed_kms - cfg.min_speed_kms;
        let cost_span = cfg.max_cost_millions - cfg.min_cost_millions;

        FareQuote {
            speed_kms:     cfg.min_speed_kms + r * speed_span,
            cost_millions: cfg.min_cost_millions + r * cost_span,
        }
    }

    /// Position of `speed_kms` within its band, in `[0, 1)`.
    ///
    /// By construction this equals the cost's position within its band; the
    /// tests hold that invariant to a floating-point tolerance.
    pub fn speed_fraction(&self, cfg: &BoardConfig) -> f64 {
        (self.speed_kms - cfg.min_speed_kms) / (cfg.max_speed_kms - cfg.min_speed_kms)
    }

    /// Position of `cost_millions` within its band, in `[0, 1)`.
    pub fn cost_fraction(&self, cfg: &BoardConfig) -> f64 {
        (self.cost_millions - cfg.min_cost_millions)
            / (cfg.max_cost_millions - cfg.min_cost_millions)
    }
}
