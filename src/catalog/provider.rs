use super::listing::{Availability, BillboardListing, TrafficLevel};

/// Source of billboard listings. The shipped implementation is an in-memory
/// fixture; a real inventory service slots in behind the same trait.
pub trait CatalogProvider: Send + Sync {
    /// All listings, in catalog order.
    fn list(&self) -> Vec<BillboardListing>;

    fn find(&self, id: u32) -> Option<BillboardListing> {
        self.list().into_iter().find(|listing| listing.id == id)
    }
}

/// The hard-coded launch inventory.
pub struct StaticCatalog {
    listings: Vec<BillboardListing>,
}

impl StaticCatalog {
    pub fn seeded() -> Self {
        Self {
            listings: vec![
                BillboardListing {
                    id: 1,
                    location: "Cairo - Downtown".to_string(),
                    size: "10m x 5m".to_string(),
                    price_per_minute: 50.0,
                    image: "assets/billboards/cairo-downtown.png".to_string(),
                    availability: Availability::High,
                    rating: 4.8,
                    description: "Premium digital billboard in the heart of downtown Cairo, offering maximum visibility to commuters and pedestrians.".to_string(),
                    traffic_level: TrafficLevel::VeryHigh,
                    city: "Cairo".to_string(),
                },
                BillboardListing {
                    id: 2,
                    location: "Alexandria - Corniche".to_string(),
                    size: "8m x 4m".to_string(),
                    price_per_minute: 40.0,
                    image: "assets/billboards/alexandria-corniche.png".to_string(),
                    availability: Availability::Medium,
                    rating: 4.5,
                    description: "Stunning waterfront billboard with panoramic views of the Mediterranean Sea, perfect for luxury brands.".to_string(),
                    traffic_level: TrafficLevel::High,
                    city: "Alexandria".to_string(),
                },
                BillboardListing {
                    id: 3,
                    location: "Giza - Pyramids Road".to_string(),
                    size: "12m x 6m".to_string(),
                    price_per_minute: 60.0,
                    image: "assets/billboards/giza-pyramids-road.png".to_string(),
                    availability: Availability::Low,
                    rating: 4.9,
                    description: "Iconic billboard location near the Pyramids, offering unparalleled visibility to tourists and locals alike.".to_string(),
                    traffic_level: TrafficLevel::High,
                    city: "Giza".to_string(),
                },
                BillboardListing {
                    id: 4,
                    location: "New Cairo".to_string(),
                    size: "9m x 4.5m".to_string(),
                    price_per_minute: 45.0,
                    image: "assets/billboards/new-cairo.png".to_string(),
                    availability: Availability::High,
                    rating: 4.7,
                    description: "Modern digital billboard in the upscale New Cairo district, targeting affluent consumers and business professionals.".to_string(),
                    traffic_level: TrafficLevel::Medium,
                    city: "Cairo".to_string(),
                },
                BillboardListing {
                    id: 5,
                    location: "Maadi - Road 9".to_string(),
                    size: "7m x 3.5m".to_string(),
                    price_per_minute: 35.0,
                    image: "assets/billboards/maadi-road-9.png".to_string(),
                    availability: Availability::High,
                    rating: 4.3,
                    description: "Charming billboard in the expatriate-friendly Maadi district, ideal for international brands and services.".to_string(),
                    traffic_level: TrafficLevel::Medium,
                    city: "Cairo".to_string(),
                },
                BillboardListing {
                    id: 6,
                    location: "Heliopolis".to_string(),
                    size: "11m x 5.5m".to_string(),
                    price_per_minute: 55.0,
                    image: "assets/billboards/heliopolis.png".to_string(),
                    availability: Availability::Medium,
                    rating: 4.6,
                    description: "Strategic billboard location on one of Heliopolis's main thoroughfares, offering excellent visibility to commuters.".to_string(),
                    traffic_level: TrafficLevel::High,
                    city: "Cairo".to_string(),
                },
                BillboardListing {
                    id: 7,
                    location: "6th of October City".to_string(),
                    size: "10m x 5m".to_string(),
                    price_per_minute: 48.0,
                    image: "assets/billboards/sixth-of-october.png".to_string(),
                    availability: Availability::High,
                    rating: 4.4,
                    description: "Modern billboard in the rapidly growing 6th of October City, perfect for reaching new urban developments.".to_string(),
                    traffic_level: TrafficLevel::Medium,
                    city: "Giza".to_string(),
                },
            ],
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn list(&self) -> Vec<BillboardListing> {
        self.listings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_preserves_order_and_ids() {
        let catalog = StaticCatalog::seeded();
        let listings = catalog.list();
        assert_eq!(listings.len(), 7);
        let ids: Vec<u32> = listings.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn find_resolves_known_ids_only() {
        let catalog = StaticCatalog::seeded();
        assert_eq!(catalog.find(3).unwrap().city, "Giza");
        assert!(catalog.find(99).is_none());
    }
}
