use serde::{Deserialize, Serialize};

/// Payload POSTed to the planning service. Key names are the wire contract.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripRequest {
    pub user_name: String,
    pub origin_city: String,
    pub preferences: String,
}

impl TripRequest {
    pub fn new(user_name: String, origin_city: String, preferences: String) -> Self {
        Self {
            user_name,
            origin_city,
            preferences,
        }
    }
}
