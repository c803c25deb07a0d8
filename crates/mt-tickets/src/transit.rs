//! Transit-time math.

use mt_core::{MtError, MtResult};

/// Whole days in transit for `distance_km` at `speed_kms`.
///
/// The division chain truncates at every step: distance/speed is cut to
/// whole seconds, then seconds→minutes→hours→days are successive integer
/// divisions. The truncation order is observable in the printed day counts,
/// so it must not be collapsed into a single floating divide.
///
/// `speed_kms` must be positive and finite. The fare generator's band
/// guarantees that, but the check stays for callers arriving another way.
pub fn transit_days(distance_km: u64, speed_kms: f64) -> MtResult<u64> {
    if !(speed_kms > 0.0) || !speed_kms.is_finite() {
        return Err(MtError::InvalidSpeed(speed_kms));
    }

    let seconds = (distance_km as f64 / speed_kms) as u64;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    Ok(hours / 24)
}
