//! Supply and demand zone (order block) detection.
//!
//! For each origin bar the detector scans the next `lookahead` bars and
//! measures the largest excursion from the origin close:
//!
//! ```text
//! up   = max((future.high - close) / close * 100)
//! down = max((close - future.low) / close * 100)
//! ```
//!
//! An upward move of at least `min_move_percent` marks a demand zone, a
//! downward one a supply zone; both may fire for the same bar. The zone spans
//! the origin bar's low to high.
//!
//! Only bars with a full lookahead window (`i < len - lookahead`) and a
//! positive close are considered.

use crate::error::Result;
use crate::patterns::event::{Strength, SupplyDemandZone, ZoneKind};
use crate::series::Bar;
use crate::traits::{validate_non_negative, validate_period};

/// Detects supply and demand zones.
///
/// # Errors
///
/// Returns an error if:
/// - `lookahead` is zero (`Error::InvalidPeriod`)
/// - `min_move_percent` is negative or not finite (`Error::InvalidParameter`)
pub fn detect_zones(
    bars: &[Bar],
    min_move_percent: f64,
    lookahead: usize,
) -> Result<Vec<SupplyDemandZone>> {
    validate_period(lookahead)?;
    validate_non_negative(min_move_percent, "zone_min_move_percent")?;

    let mut zones = Vec::new();
    let origins = bars.len().saturating_sub(lookahead);
    for (i, origin) in bars.iter().enumerate().take(origins) {
        if origin.close <= 0.0 {
            continue;
        }
        let window = &bars[i + 1..=i + lookahead];
        let (up, down) = window.iter().fold((0.0_f64, 0.0_f64), |(up, down), future| {
            (
                up.max((future.high - origin.close) / origin.close * 100.0),
                down.max((origin.close - future.low) / origin.close * 100.0),
            )
        });

        for (kind, moved) in [(ZoneKind::Demand, up), (ZoneKind::Supply, down)] {
            if moved >= min_move_percent && moved > 0.0 {
                zones.push(SupplyDemandZone {
                    index: i,
                    time: origin.time,
                    zone_top: origin.high,
                    zone_bottom: origin.low,
                    kind,
                    strength: Strength::from_move_percent(moved),
                    move_percent: moved,
                });
            }
        }
    }

    Ok(zones)
}
