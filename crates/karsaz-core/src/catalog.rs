//! # Catalog Module
//!
//! Read-only item name → price lookups.
//!
//! ## The Missing-Key Trap
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  A map lookup that silently inserts a default for an absent key     │
//! │  turns a typo into a FREE item:                                     │
//! │                                                                     │
//! │    price_of("Chips") → Rs.0.00   ❌ item was never stocked!         │
//! │                                                                     │
//! │  Here `price_of` FAILS for missing names. Callers that want a       │
//! │  soft check use `exists` first, as the session loop does.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is seeded from explicit [`CatalogEntry`] configuration at
//! construction and is immutable for the life of the process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Catalog Entry
// =============================================================================

/// One sellable item in the seed configuration.
///
/// Serde-derived so the seed list can later come from a file or database
/// without touching the catalog or the session loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Item name as typed at the till (exact, case-sensitive).
    pub name: String,

    /// Unit price in paisa.
    pub unit_price_paisa: i64,
}

impl CatalogEntry {
    /// Creates an entry from a name and a price in paisa.
    pub fn new(name: impl Into<String>, unit_price_paisa: i64) -> Self {
        CatalogEntry {
            name: name.into(),
            unit_price_paisa,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paisa(self.unit_price_paisa)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Static name → unit price lookup table for sellable items.
///
/// ## Invariants
/// - Read-only after construction
/// - Duplicate names in the seed: last one wins
/// - `price_of` never yields a default for an unknown name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    prices: BTreeMap<String, Money>,
}

impl Catalog {
    /// Builds a catalog from seed entries.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let prices = entries
            .into_iter()
            .map(|e| (e.name.clone(), e.unit_price()))
            .collect();
        Catalog { prices }
    }

    /// Checks whether an item is stocked.
    pub fn exists(&self, name: &str) -> bool {
        self.prices.contains_key(name)
    }

    /// Looks up the unit price of an item.
    ///
    /// ## Errors
    /// `CoreError::ItemNotFound` when the name is absent. There is no
    /// zero-price fallback.
    pub fn price_of(&self, name: &str) -> CoreResult<Money> {
        self.prices
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
    }

    /// Number of distinct items stocked.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Checks if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates over (name, unit price) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.prices.iter().map(|(name, price)| (name.as_str(), *price))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new([
            CatalogEntry::new("Egg", 3000),
            CatalogEntry::new("Bread", 10000),
        ])
    }

    #[test]
    fn test_exists() {
        let catalog = sample_catalog();
        assert!(catalog.exists("Egg"));
        assert!(catalog.exists("Bread"));
        assert!(!catalog.exists("Chips"));
        // Names are case-sensitive, as at the till.
        assert!(!catalog.exists("egg"));
    }

    #[test]
    fn test_price_of_known_item() {
        let catalog = sample_catalog();
        assert_eq!(catalog.price_of("Egg").unwrap().paisa(), 3000);
        assert_eq!(catalog.price_of("Bread").unwrap().paisa(), 10000);
    }

    #[test]
    fn test_price_of_unknown_item_fails() {
        let catalog = sample_catalog();
        let err = catalog.price_of("Chips").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(name) if name == "Chips"));
    }

    #[test]
    fn test_duplicate_seed_last_wins() {
        let catalog = Catalog::new([
            CatalogEntry::new("Egg", 3000),
            CatalogEntry::new("Egg", 3500),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price_of("Egg").unwrap().paisa(), 3500);
    }

    #[test]
    fn test_iteration_in_name_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Bread", "Egg"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new([]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.price_of("Egg").is_err());
    }
}
