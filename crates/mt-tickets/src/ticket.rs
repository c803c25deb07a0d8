//! Ticket records and board generation.
//!
//! # Draw order
//!
//! Each ticket consumes randomness in a fixed order: spaceline, then fare
//! quote, then trip type (the day count is pure arithmetic on the quoted
//! speed). With a seeded [`TicketRng`] this pins the whole board — same
//! seed, same table, byte for byte — so the order is a contract, not an
//! implementation detail.

use mt_core::{BoardConfig, MtError, MtResult, TicketRng};

use crate::quote::FareQuote;
use crate::spaceline::Spaceline;
use crate::transit::transit_days;
use crate::trip::TripType;

/// One row of the pricing board. Created once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket {
    pub spaceline: Spaceline,
    /// Whole days in transit at the quoted cruise speed.
    pub days: u64,
    pub trip_type: TripType,
    /// Quoted cruise speed in km/s. Not printed, but kept so callers can
    /// audit the speed/cost pairing.
    pub speed_kms: f64,
    /// Fare in millions of currency units.
    pub cost_millions: f64,
}

/// Generate `cfg.ticket_count` tickets from `catalog`, in draw order.
///
/// An empty catalog fails fast with [`MtError::Config`] before anything is
/// drawn. Any ticket count is honored here, including zero — rejecting a
/// zero count is [`BoardConfig::validate`]'s job, and keeping the two seams
/// separate lets tests generate empty boards.
pub fn generate_tickets(
    cfg: &BoardConfig,
    catalog: &[Spaceline],
    rng: &mut TicketRng,
) -> MtResult<Vec<Ticket>> {
    if catalog.is_empty() {
        return Err(MtError::Config("spaceline catalog is empty".into()));
    }

    let mut tickets = Vec::with_capacity(cfg.ticket_count);
    for _ in 0..cfg.ticket_count {
        let spaceline = Spaceline::pick(catalog, rng)
            .ok_or_else(|| MtError::Config("spaceline catalog is empty".into()))?;
        let quote = FareQuote::draw(cfg, rng);
        let trip_type = TripType::pick(rng);
        let days = transit_days(cfg.mars_distance_km, quote.speed_kms)?;

        tickets.push(Ticket {
            spaceline,
            days,
            trip_type,
            speed_kms: quote.speed_kms,
            cost_millions: quote.cost_millions,
        });
    }

    Ok(tickets)
}
