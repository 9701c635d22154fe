use serde::{Deserialize, Serialize};

use super::HotelId;

/// Hotel summary, only what the selection control needs.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HotelsData {
    pub hotels: Vec<Hotel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiEnvelope;
    use serde_json::json;

    #[test]
    fn decodes_hotel_catalog_ignoring_extra_fields() {
        let body = json!({
            "data": { "hotels": [
                { "id": 3, "name": "Seaside", "location": "Nice", "rooms": 40 },
                { "id": 4, "name": "Alpine" }
            ]}
        });
        let hotels = serde_json::from_value::<ApiEnvelope<HotelsData>>(body)
            .unwrap()
            .into_inner()
            .hotels;
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0], Hotel { id: 3, name: "Seaside".into() });
    }
}
