use serde::{Deserialize, Serialize};

/// Itinerary returned by the planning service. The service owns this schema;
/// every field defaults so a sparse response still renders instead of failing
/// to decode.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TripPlan {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub from_city: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub hotel_name: String,
    #[serde(default)]
    pub hotel_location: String,
    #[serde(default)]
    pub hotel_price: Option<u32>,
    #[serde(default)]
    pub hotel_stars: Option<u8>,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl TripPlan {
    pub fn flight_summary(&self) -> String {
        format!(
            "{} → {}, arriving {}",
            self.from_city, self.destination, self.arrival_time
        )
    }

    pub fn hotel_summary(&self) -> String {
        let mut summary = format!("{} ({})", self.hotel_name, self.hotel_location);
        if let Some(stars) = self.hotel_stars {
            summary.push_str(&format!(", {stars}★"));
        }
        if let Some(price) = self.hotel_price {
            summary.push_str(&format!(", ${price}/night"));
        }
        summary
    }
}
