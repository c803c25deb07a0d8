//! `mt-tickets` — ticket generation for the `mars_tix` pricing board.
//!
//! # What lives here
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`spaceline`] | `Spaceline` carrier enum and catalog            |
//! | [`trip`]      | `TripType` enum                                 |
//! | [`quote`]     | `FareQuote` — one draw, correlated speed + cost |
//! | [`transit`]   | `transit_days` truncating day calculator        |
//! | [`ticket`]    | `Ticket` record and `generate_tickets`          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod quote;
pub mod spaceline;
pub mod ticket;
pub mod transit;
pub mod trip;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use quote::FareQuote;
pub use spaceline::Spaceline;
pub use ticket::{Ticket, generate_tickets};
pub use transit::transit_days;
pub use trip::TripType;
