//! Board configuration.
//!
//! # Design
//!
//! All process-wide values live in one plain struct constructed at startup
//! and passed by reference down the call chain. `Default` reproduces the
//! constants of the original pricing board; applications that want a
//! different ticket count or fare band build the struct by hand and call
//! [`BoardConfig::validate`] before generating anything.

use crate::{MtError, MtResult};

// ── Default constants ─────────────────────────────────────────────────────────

/// Advertised departure date. Carried in the config for completeness; the
/// rendered table does not currently show it.
pub const DEPARTURE_DATE: &str = "October 13, 2020";

/// Number of tickets on the default board.
pub const TICKET_COUNT: usize = 10;

/// Earth–Mars distance used for transit-time math. A fixed figure, not a
/// live ephemeris — close approach is ~54.6 M km, opposition ~101 M km.
pub const MARS_DISTANCE_KM: u64 = 62_100_100;

/// Fare band, in millions of currency units.
pub const MIN_COST_MILLIONS: f64 = 36.0;
pub const MAX_COST_MILLIONS: f64 = 50.0;

/// Cruise-speed band, in km/s.
pub const MIN_SPEED_KMS: f64 = 16.0;
pub const MAX_SPEED_KMS: f64 = 30.0;

// ── BoardConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration for one board run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Advertised departure date (informational only).
    pub departure_date: String,

    /// How many tickets to generate. Must be at least 1.
    pub ticket_count: usize,

    /// Trip distance in kilometers. Must be non-zero.
    pub mars_distance_km: u64,

    /// Fare band in millions; `min` must be strictly below `max`.
    pub min_cost_millions: f64,
    pub max_cost_millions: f64,

    /// Cruise-speed band in km/s; `min` must be positive and strictly
    /// below `max`, which keeps the day calculator's divisor away from zero.
    pub min_speed_kms: f64,
    pub max_speed_kms: f64,

    /// Master RNG seed. `Some` makes the whole run reproducible; `None`
    /// seeds from OS entropy so every run prints a fresh board.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            departure_date:    DEPARTURE_DATE.to_owned(),
            ticket_count:      TICKET_COUNT,
            mars_distance_km:  MARS_DISTANCE_KM,
            min_cost_millions: MIN_COST_MILLIONS,
            max_cost_millions: MAX_COST_MILLIONS,
            min_speed_kms:     MIN_SPEED_KMS,
            max_speed_kms:     MAX_SPEED_KMS,
            seed:              None,
        }
    }
}

impl BoardConfig {
    /// Check every invariant the generators rely on.
    ///
    /// Call once at startup; all failures are [`MtError::Config`] with a
    /// message naming the offending field.
    pub fn validate(&self) -> MtResult<()> {
        if self.ticket_count == 0 {
            return Err(MtError::Config("ticket_count must be at least 1".into()));
        }
        if self.mars_distance_km == 0 {
            return Err(MtError::Config("mars_distance_km must be non-zero".into()));
        }
        Self::check_band("cost", self.min_cost_millions, self.max_cost_millions)?;
        Self::check_band("speed", self.min_speed_kms, self.max_speed_kms)?;
        if self.min_speed_kms <= 0.0 {
            return Err(MtError::Config(format!(
                "min_speed_kms must be positive, got {}",
                self.min_speed_kms
            )));
        }
        Ok(())
    }

    fn check_band(name: &str, min: f64, max: f64) -> MtResult<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MtError::Config(format!("{name} band must be finite")));
        }
        if min >= max {
            return Err(MtError::Config(format!(
                "{name} band is empty: min {min} >= max {max}"
            )));
        }
        Ok(())
    }
}
