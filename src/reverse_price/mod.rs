pub mod search;

use crate::catalog::{CatalogItem, PricingKind};
use crate::error::Error;
use crate::pricing::{self, PercentBand};
use crate::rng::HourlyRng;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::warn;

/// The void donation costs one shell, always.
const VOID_DONATION_PRICE: i64 = 1;

/// The travel stipend covers $10 at the default $10/hour conversion.
const STIPEND_USD_COST: f64 = 10.0;
const STIPEND_UNITS_PER_HOUR: f64 = 10.0;

/// Recovered pricing record for one catalog item, serialized with the same
/// camelCase keys as the shop's own dumps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveredPrice {
    pub id: String,
    pub name: String,
    pub current_price: i64,
    pub base_price: i64,
}

enum PriceStatus {
    Fixed,
    Formula,
    Exact,
    Discount(f64),
    Markup(f64),
}

impl fmt::Display for PriceStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PriceStatus::Fixed => write!(formatter, "fixed"),
            PriceStatus::Formula => write!(formatter, "formula"),
            PriceStatus::Exact => write!(formatter, "exact"),
            PriceStatus::Discount(percent) => write!(formatter, "{:.1}% off", percent),
            PriceStatus::Markup(percent) => write!(formatter, "{:.1}% up", percent),
        }
    }
}

fn status_for(kind: PricingKind, current_price: i64, base_price: i64) -> PriceStatus {
    match kind {
        PricingKind::Fixed => PriceStatus::Fixed,
        PricingKind::Formula => PriceStatus::Formula,
        PricingKind::Randomized => {
            if current_price < base_price {
                let discount = (base_price - current_price) as f64 / base_price as f64 * 100.0;
                PriceStatus::Discount(discount)
            } else if current_price > base_price {
                let markup = (current_price - base_price) as f64 / base_price as f64 * 100.0;
                PriceStatus::Markup(markup)
            } else {
                PriceStatus::Exact
            }
        }
    }
}

/// Recovers base prices for a whole catalog snapshot within one hour window.
///
/// The hour bucket lives inside `rng`, captured once by the caller, so a
/// batch cannot straddle a window boundary mid-run. Items that fail to
/// invert exactly keep their best-effort estimate and never abort the rest
/// of the catalog.
pub fn run(rng: &HourlyRng, items: &[CatalogItem], band: PercentBand) -> Vec<RecoveredPrice> {
    let mut results = Vec::with_capacity(items.len());

    for item in items {
        let kind = item.pricing_kind();
        let base_price = match kind {
            PricingKind::Fixed => VOID_DONATION_PRICE,
            PricingKind::Formula => {
                pricing::stipend_price(STIPEND_USD_COST, STIPEND_UNITS_PER_HOUR)
            }
            PricingKind::Randomized => {
                let recovery = search::recover_base_price(rng, &item.id, item.price, band);
                if !recovery.exact {
                    warn!(
                        item = %item.name,
                        observed = item.price,
                        estimate = recovery.base_price,
                        verification = recovery.verification_price,
                        "no exact inverse in probe window; keeping best-effort estimate"
                    );
                }
                recovery.base_price
            }
        };

        println!(
            "{:<35} | current: {:>5} | base: {:>5} | {}",
            item.name,
            item.price,
            base_price,
            status_for(kind, item.price, base_price)
        );

        results.push(RecoveredPrice {
            id: item.id.clone(),
            name: item.name.clone(),
            current_price: item.price,
            base_price,
        });
    }

    results
}

/// Dumps the recovered records as pretty-printed JSON.
pub fn write_report(path: &Path, results: &[RecoveredPrice]) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_recovers_catalog() {
        let rng = HourlyRng::new("u1", 123456);
        let band = PercentBand::default();
        let displayed = pricing::randomized_price(&rng, "widget", 750, band);

        let items = vec![
            CatalogItem {
                id: "widget".to_string(),
                name: "Widget".to_string(),
                price: displayed,
            },
            CatalogItem {
                id: "void".to_string(),
                name: "Donate a shell to the void".to_string(),
                price: 1,
            },
            CatalogItem {
                id: "stipend".to_string(),
                name: "Travel Stipend".to_string(),
                price: 16,
            },
        ];

        let results = run(&rng, &items, band);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].base_price, 750);
        assert_eq!(results[0].current_price, displayed);
        assert_eq!(results[1].base_price, 1);
        assert_eq!(results[2].base_price, 16);
    }

    #[test]
    fn test_fixed_item_ignores_subject_and_hour() {
        let items = vec![CatalogItem {
            id: "void".to_string(),
            name: "Donate a shell to the void".to_string(),
            price: 7,
        }];
        let band = PercentBand::default();

        for &(subject, hour) in &[("u1", 1i64), ("someone-else", 99999)] {
            let rng = HourlyRng::new(subject, hour);
            let results = run(&rng, &items, band);
            assert_eq!(results[0].base_price, 1);
        }
    }

    #[test]
    fn test_report_uses_camel_case_keys() {
        let record = RecoveredPrice {
            id: "x".to_string(),
            name: "X".to_string(),
            current_price: 5,
            base_price: 4,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("currentPrice").is_some());
        assert!(value.get("basePrice").is_some());
        assert!(value.get("current_price").is_none());
    }

    #[test]
    fn test_write_report_round_trips() {
        let records = vec![RecoveredPrice {
            id: "x1".to_string(),
            name: "Gadget".to_string(),
            current_price: 120,
            base_price: 111,
        }];

        let path = std::env::temp_dir().join(format!("pricefinder_report_{}.json", std::process::id()));
        write_report(&path, &records).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed[0]["basePrice"], 111);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(status_for(PricingKind::Fixed, 1, 1).to_string(), "fixed");
        assert_eq!(status_for(PricingKind::Formula, 16, 16).to_string(), "formula");
        assert_eq!(status_for(PricingKind::Randomized, 500, 500).to_string(), "exact");
        assert_eq!(status_for(PricingKind::Randomized, 450, 500).to_string(), "10.0% off");
        assert_eq!(status_for(PricingKind::Randomized, 550, 500).to_string(), "10.0% up");
    }
}
