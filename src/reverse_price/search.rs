use crate::pricing::{self, PercentBand};
use crate::rng::HourlyRng;

/// Widest offset probed around the analytic estimate before giving up.
pub const PROBE_RADIUS: i64 = 5;

/// Outcome of one base-price recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery {
    /// Recovered base price; a best-effort estimate when `exact` is false.
    pub base_price: i64,
    /// Whether the forward computation reproduces the observed price.
    pub exact: bool,
    /// Displayed price the recovered base maps to, for diagnostics.
    pub verification_price: i64,
}

/// Recovers the hidden base price behind an observed displayed price.
///
/// The multiplier for the current window depends only on subject, item and
/// hour, so dividing it out of the observed price gives an analytic estimate
/// of the base. Rounding and clamping in the forward computation make that
/// estimate approximate near the band edges; the integer neighborhood of the
/// estimate is searched, nearest offsets first, for a value whose forward
/// price matches the observation exactly.
pub fn recover_base_price(
    rng: &HourlyRng,
    item_id: &str,
    observed_price: i64,
    band: PercentBand,
) -> Recovery {
    let multiplier = pricing::price_multiplier(rng, item_id, band);
    // Base prices are whole shells and never drop below 1.
    let estimate = ((observed_price as f64 / multiplier).round() as i64).max(1);

    for offset in probe_offsets(PROBE_RADIUS) {
        let candidate = estimate + offset;
        if candidate <= 0 {
            continue;
        }

        let verification = pricing::randomized_price(rng, item_id, candidate, band);
        if verification == observed_price {
            return Recovery {
                base_price: candidate,
                exact: true,
                verification_price: verification,
            };
        }
    }

    Recovery {
        base_price: estimate,
        exact: false,
        verification_price: pricing::randomized_price(rng, item_id, estimate, band),
    }
}

/// Offsets 0, -1, 1, -2, 2, ... out to `radius`, nearest first.
fn probe_offsets(radius: i64) -> impl Iterator<Item = i64> {
    std::iter::once(0).chain((1..=radius).flat_map(|step| vec![-step, step]))
}
