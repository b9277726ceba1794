use sha2::{Digest, Sha256};

/// Width of one pricing window, in epoch seconds.
pub const HOUR_SECONDS: i64 = 3600;

// The shop divides the leading 32 hash bits by the maximum u32 value
// itself, not by 2^32, so the top hash value maps to exactly 1.0.
const FRACTION_DIVISOR: f64 = u32::MAX as f64;

/// Deterministic per-hour randomizer behind the shop's dynamic pricing.
///
/// The shop derives a pseudo-random fraction for every (subject, item, hour)
/// triple by hashing `"{subject}-{item}-{hour}"` with SHA-256 and reading
/// the first 8 hex characters as an unsigned integer. The subject and hour
/// bucket are fixed for a whole batch run, so they are captured here once
/// and every item draws its fraction against the same window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyRng {
    subject_id: String,
    hour: i64,
}

impl HourlyRng {
    pub fn new(subject_id: &str, hour: i64) -> Self {
        HourlyRng {
            subject_id: subject_id.to_string(),
            hour,
        }
    }

    /// Hour bucket containing a wall-clock timestamp in epoch seconds.
    #[inline]
    pub fn hour_bucket(epoch_seconds: i64) -> i64 {
        epoch_seconds.div_euclid(HOUR_SECONDS)
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    #[inline]
    pub fn hour(&self) -> i64 {
        self.hour
    }

    /// Same subject, different window.
    pub fn at_hour(&self, hour: i64) -> HourlyRng {
        HourlyRng {
            subject_id: self.subject_id.clone(),
            hour,
        }
    }

    /// Deterministic fraction in [0, 1] for one item in this window.
    ///
    /// Bit-exact with the shop: SHA-256 over the seed string, first 8 hex
    /// characters read as a big-endian u32, divided by 0xFFFFFFFF.
    pub fn fraction(&self, item_id: &str) -> f64 {
        let seed = format!("{}-{}-{}", self.subject_id, item_id, self.hour);
        let digest = Sha256::digest(seed.as_bytes());
        let lead = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        lead as f64 / FRACTION_DIVISOR
    }
}
