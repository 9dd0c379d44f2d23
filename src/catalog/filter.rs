use serde::Deserialize;

use super::listing::BillboardListing;

/// User-driven narrowing of the listing grid. An empty filter passes
/// everything through.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogFilter {
    /// Case-insensitive substring matched against location and description.
    pub search: Option<String>,
    /// Exact city; `None` means no city constraint.
    pub city: Option<String>,
}

impl CatalogFilter {
    fn matches(&self, listing: &BillboardListing) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(term) if !term.trim().is_empty() => {
                let term = term.to_lowercase();
                listing.location.to_lowercase().contains(&term)
                    || listing.description.to_lowercase().contains(&term)
            }
            _ => true,
        };

        let matches_city = match self.city.as_deref() {
            Some(city) => listing.city == city,
            None => true,
        };

        matches_search && matches_city
    }
}

/// Filter listings, preserving their catalog order.
pub fn filter_listings(
    listings: &[BillboardListing],
    filter: &CatalogFilter,
) -> Vec<BillboardListing> {
    listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect()
}

/// Distinct cities in first-seen catalog order, for the city filter tabs.
pub fn cities(listings: &[BillboardListing]) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();
    for listing in listings {
        if !cities.contains(&listing.city) {
            cities.push(listing.city.clone());
        }
    }
    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::provider::{CatalogProvider, StaticCatalog};

    fn all_listings() -> Vec<BillboardListing> {
        StaticCatalog::seeded().list()
    }

    #[test]
    fn empty_filter_passes_everything() {
        let listings = all_listings();
        let filtered = filter_listings(&listings, &CatalogFilter::default());
        assert_eq!(filtered, listings);
    }

    #[test]
    fn search_matches_location_and_description_case_insensitively() {
        let listings = all_listings();

        let by_location = filter_listings(
            &listings,
            &CatalogFilter {
                search: Some("CORNICHE".to_string()),
                city: None,
            },
        );
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, 2);

        let by_description = filter_listings(
            &listings,
            &CatalogFilter {
                search: Some("tourists".to_string()),
                city: None,
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, 3);
    }

    #[test]
    fn city_filter_is_exact_and_composes_with_search() {
        let listings = all_listings();

        let giza = filter_listings(
            &listings,
            &CatalogFilter {
                search: None,
                city: Some("Giza".to_string()),
            },
        );
        assert_eq!(
            giza.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![3, 7],
            "catalog order is preserved"
        );

        let giza_modern = filter_listings(
            &listings,
            &CatalogFilter {
                search: Some("modern".to_string()),
                city: Some("Giza".to_string()),
            },
        );
        assert_eq!(giza_modern.len(), 1);
        assert_eq!(giza_modern[0].id, 7);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let listings = all_listings();
        let filtered = filter_listings(
            &listings,
            &CatalogFilter {
                search: Some("nonexistent".to_string()),
                city: None,
            },
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn cities_are_distinct_in_first_seen_order() {
        let listings = all_listings();
        assert_eq!(cities(&listings), vec!["Cairo", "Alexandria", "Giza"]);
    }
}
