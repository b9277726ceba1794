use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One entry of the shop catalog as currently displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Currently displayed price in shells.
    pub price: i64,
}

/// Pricing rule the shop applies to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingKind {
    /// Constant price, never randomized.
    Fixed,
    /// Golden-ratio stipend formula, never randomized.
    Formula,
    /// Randomized hourly around a hidden base price.
    Randomized,
}

impl CatalogItem {
    /// The shop special-cases two items by name prefix, case-insensitively;
    /// everything else gets the hourly randomization.
    pub fn pricing_kind(&self) -> PricingKind {
        let name = self.name.to_lowercase();
        if name.starts_with("donate a shell to the void") {
            PricingKind::Fixed
        } else if name.starts_with("travel stipend") {
            PricingKind::Formula
        } else {
            PricingKind::Randomized
        }
    }
}

/// Loads a catalog snapshot from a JSON file: an array of
/// `{id, name, price}` objects.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>, Error> {
    let contents = fs::read_to_string(path)?;
    let items: Vec<CatalogItem> = serde_json::from_str(&contents)?;

    if items.is_empty() {
        return Err(Error::from(format!(
            "no catalog items in {}",
            path.display()
        )));
    }

    if let Some(bad) = items.iter().find(|item| item.price < 1) {
        return Err(Error::from(format!(
            "item {} has non-positive price {}",
            bad.id, bad.price
        )));
    }

    Ok(items)
}

// Snapshot of the shop as displayed when this tool was built, with the
// randomized prices observed at the time.
const DEFAULT_CATALOG: &[(&str, &str, i64)] = &[
    ("cmebn7caq0118nv01spx78x4t", "Raspbery PI 5", 464),
    ("cmebn55yi0116nv01orzpor1v", "Samsung T7 1TB SSD", 541),
    ("cmebmn7um010wnv012eongfmj", "Flipper Zero", 1066),
    ("cme97z84p00r7nv01etg8md2q", "iPad 11-inch + Apple Pencil (USB-C)", 1903),
    ("cmdsx1fef0052sd01ygneytpv", "E-fidgets", 58),
    ("cmdmch4xb056cqn01rc10afcq", "Donate a shell to the void", 1),
    ("cmdelz54j00celf013dx0xr84", "RTL-SDR V4 Kit", 292),
    ("cmdelstju00cclf01v5y89dr9", "Pinetime", 254),
    ("cmdelpbl000calf01fhievo7a", "Universal AI Credit", 49),
    ("cmdel7uer00c8lf017kdhtiaa", "Centauri", 1294),
    ("cmdel771k00c6lf01coz5rlhz", "Centauri Carbon", 1802),
    ("cmdel4iob00c3lf01obbetleo", "M4 mac mini", 2685),
    ("cmd7in0r4000kro01x3l2c1v8", "Travel Stipend", 16),
];

/// Catalog used when no snapshot file is supplied.
pub fn default_catalog() -> Vec<CatalogItem> {
    DEFAULT_CATALOG
        .iter()
        .map(|(id, name, price)| CatalogItem {
            id: (*id).to_string(),
            name: (*name).to_string(),
            price: *price,
        })
        .collect()
}
