//! `mt-core` — foundational types for the `mars_tix` pricing board.
//!
//! This crate is a dependency of every other `mt-*` crate. It intentionally
//! has no `mt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`config`] | `BoardConfig` and its default constants       |
//! | [`rng`]    | `TicketRng`, the board's single random source |
//! | [`error`]  | `MtError`, `MtResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BoardConfig;
pub use error::{MtError, MtResult};
pub use rng::TicketRng;
