pub mod commands;
pub mod filter;
pub mod listing;
pub mod provider;

pub use filter::{cities, filter_listings, CatalogFilter};
pub use listing::{Availability, BillboardListing, TrafficLevel};
pub use provider::{CatalogProvider, StaticCatalog};
