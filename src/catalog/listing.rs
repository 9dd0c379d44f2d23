use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrafficLevel {
    VeryHigh,
    High,
    Medium,
    Low,
}

/// A bookable billboard as shown in the listing grid. Read-only from the
/// wizard's perspective; the draft keeps its own copy for rate and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardListing {
    pub id: u32,
    pub location: String,
    pub size: String,
    pub price_per_minute: f64,
    pub image: String,
    pub availability: Availability,
    pub rating: f64,
    pub description: String,
    pub traffic_level: TrafficLevel,
    pub city: String,
}
