//! Price forecasts for future windows, derived from a recovered base price.
//!
//! The randomizer is seeded by the hour bucket, so once the base price is
//! known every future displayed price is known too.

use crate::pricing::{self, PercentBand};
use crate::rng::HourlyRng;

/// Displayed price in one future window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyPrice {
    pub hour: i64,
    pub price: i64,
    pub percent_of_base: f64,
}

/// Cheapest window found within a forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestBuy {
    pub hour: i64,
    pub price: i64,
    pub savings: i64,
}

/// Result of a cheapest-price scan across synthetic subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct CheapestScan {
    pub subject_id: String,
    pub hour: i64,
    pub price: i64,
    pub percent_of_base: f64,
}

/// Displayed prices for the next `hours_ahead` windows after the one in
/// `rng`.
pub fn future_prices(
    rng: &HourlyRng,
    item_id: &str,
    base_price: i64,
    band: PercentBand,
    hours_ahead: i64,
) -> Vec<HourlyPrice> {
    let mut prices = Vec::with_capacity(hours_ahead.max(0) as usize);

    for offset in 1..=hours_ahead {
        let hour = rng.hour() + offset;
        let price = pricing::randomized_price(&rng.at_hour(hour), item_id, base_price, band);
        prices.push(HourlyPrice {
            hour,
            price,
            percent_of_base: price as f64 / base_price as f64 * 100.0,
        });
    }

    prices
}

/// Lowest displayed price within the next `hours_ahead` windows.
///
/// The current window (at the observed price) wins ties, so waiting is only
/// suggested when it strictly saves shells.
pub fn best_time_to_buy(
    rng: &HourlyRng,
    item_id: &str,
    observed_price: i64,
    base_price: i64,
    band: PercentBand,
    hours_ahead: i64,
) -> BestBuy {
    let mut best_hour = rng.hour();
    let mut best_price = observed_price;

    for entry in future_prices(rng, item_id, base_price, band, hours_ahead) {
        if entry.price < best_price {
            best_price = entry.price;
            best_hour = entry.hour;
        }
    }

    BestBuy {
        hour: best_hour,
        price: best_price,
        savings: observed_price - best_price,
    }
}

/// Cheapest price the scheme can display for an item, over `sample_subjects`
/// synthetic subject ids and `hours` windows starting at `start_hour`.
///
/// Starts from the base price itself with an empty subject, so a scan that
/// finds nothing cheaper reports the base.
pub fn global_cheapest(
    item_id: &str,
    base_price: i64,
    band: PercentBand,
    sample_subjects: u32,
    hours: i64,
    start_hour: i64,
) -> CheapestScan {
    let mut cheapest = CheapestScan {
        subject_id: String::new(),
        hour: start_hour,
        price: base_price,
        percent_of_base: 100.0,
    };

    for sample in 0..sample_subjects {
        let subject_id = format!("user-{:010}", sample);
        let rng = HourlyRng::new(&subject_id, start_hour);

        for offset in 0..hours {
            let hour = start_hour + offset;
            let price = pricing::randomized_price(&rng.at_hour(hour), item_id, base_price, band);
            if price < cheapest.price {
                cheapest = CheapestScan {
                    subject_id: subject_id.clone(),
                    hour,
                    price,
                    percent_of_base: price as f64 / base_price as f64 * 100.0,
                };
            }
        }
    }

    cheapest
}
