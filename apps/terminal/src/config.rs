//! # Store Configuration
//!
//! Fixed configuration for one store: receipt header, operator
//! credentials, and the catalog seed.
//!
//! Everything here is explicit data passed into the access gate and the
//! catalog at construction - no hidden globals. Swapping in a loadable
//! config file or real credential storage later means replacing
//! `StoreConfig::default()`, nothing else; the serde derives are already
//! in place for that.

use serde::{Deserialize, Serialize};

use karsaz_core::{CatalogEntry, StoreHeader};

use crate::auth::Credentials;

/// Complete startup configuration for the till.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity printed on every receipt.
    pub header: StoreHeader,

    /// Operator credentials checked once at startup.
    pub credentials: Credentials,

    /// Items stocked by this store, with unit prices in paisa.
    pub catalog_seed: Vec<CatalogEntry>,
}

/// The Karsaz branch as built in: header, operator login, and the five
/// stocked items.
impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            header: StoreHeader {
                store_name: "KARSAZ QUICK SHOP".to_string(),
                address: "NORE IV Market, Karsaz, Karachi.".to_string(),
                phone_primary: "0333-3168235".to_string(),
                phone_secondary: "0333-3168241".to_string(),
            },
            credentials: Credentials {
                username: "admin".to_string(),
                password: "password".to_string(),
            },
            catalog_seed: vec![
                CatalogEntry::new("Egg", 3000),     // Rs.30.00
                CatalogEntry::new("Bread", 10000),  // Rs.100.00
                CatalogEntry::new("Milk", 9000),    // Rs.90.00
                CatalogEntry::new("Cake", 30000),   // Rs.300.00
                CatalogEntry::new("Apple", 8000),   // Rs.80.00
            ],
        }
    }
}
