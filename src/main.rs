use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pricefinder::catalog::{self, PricingKind};
use pricefinder::forecast;
use pricefinder::pricing::PercentBand;
use pricefinder::reverse_price;
use pricefinder::rng::HourlyRng;

// Same sampling window the shop analysis used: a week of hours across a
// thousand synthetic subjects.
const GLOBAL_SCAN_SUBJECTS: u32 = 1000;
const GLOBAL_SCAN_HOURS: i64 = 168;

/// Recovers hidden base prices from the shop's hourly randomized display
/// prices.
#[derive(Debug, Parser)]
struct Cli {
    /// Subject (user) id the shop seeds the hourly hash with
    #[arg(long, default_value = "cmcxl99oj00r9mt01sy59w923")]
    subject: String,

    /// Lower bound of the randomization band, in percent
    #[arg(long, default_value_t = 90.0)]
    min_percent: f64,

    /// Upper bound of the randomization band, in percent
    #[arg(long, default_value_t = 110.0)]
    max_percent: f64,

    /// Catalog snapshot to invert, a JSON array of {id, name, price};
    /// defaults to the built-in snapshot
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// File the recovered prices are dumped to
    #[arg(long, default_value = "base_prices.json")]
    output: PathBuf,

    /// Also scan this many future hours for the best time to buy
    #[arg(long, default_value_t = 0)]
    forecast_hours: i64,

    /// Also sample synthetic subjects for the cheapest price the scheme
    /// can ever display
    #[arg(long)]
    global_scan: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pricefinder=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let args = Cli::parse();

    let items = match &args.catalog {
        Some(path) => catalog::load_catalog(path)?,
        None => catalog::default_catalog(),
    };
    let band = PercentBand::new(args.min_percent, args.max_percent);

    // One wall-clock read for the whole batch; every computation below sees
    // the same hour bucket.
    let now = chrono::Utc::now();
    let hour = HourlyRng::hour_bucket(now.timestamp());
    let rng = HourlyRng::new(&args.subject, hour);

    println!("Shop base price recovery");
    println!("{}", "=".repeat(50));
    println!("Subject: {}", args.subject);
    println!("Timestamp: {}", now);
    println!("Hour bucket: {}", hour);
    println!();

    let results = reverse_price::run(&rng, &items, band);
    reverse_price::write_report(&args.output, &results)?;

    if args.forecast_hours > 0 {
        println!();
        println!("Best time to buy within {} hours:", args.forecast_hours);
        for (item, record) in items.iter().zip(&results) {
            if item.pricing_kind() != PricingKind::Randomized {
                continue;
            }

            let best = forecast::best_time_to_buy(
                &rng,
                &item.id,
                item.price,
                record.base_price,
                band,
                args.forecast_hours,
            );
            if best.savings > 0 {
                println!(
                    "{:<35} | {:>5} shells in {}h (saves {})",
                    item.name,
                    best.price,
                    best.hour - hour,
                    best.savings
                );
            } else {
                println!("{:<35} | {:>5} shells now", item.name, best.price);
            }
        }
    }

    if args.global_scan {
        println!();
        println!(
            "Cheapest possible price ({} subjects x {} hours):",
            GLOBAL_SCAN_SUBJECTS, GLOBAL_SCAN_HOURS
        );
        for (item, record) in items.iter().zip(&results) {
            if item.pricing_kind() != PricingKind::Randomized {
                continue;
            }

            let scan = forecast::global_cheapest(
                &item.id,
                record.base_price,
                band,
                GLOBAL_SCAN_SUBJECTS,
                GLOBAL_SCAN_HOURS,
                hour,
            );
            println!(
                "{:<35} | {:>5} shells ({:.1}% of base) at hour {}",
                item.name, scan.price, scan.percent_of_base, scan.hour
            );
        }
    }

    println!();
    println!("Results saved to {}", args.output.display());

    Ok(())
}
