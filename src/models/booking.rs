use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::BookingId;

/// A booking as returned by the list endpoint (snake_case on the wire).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Booking {
    pub id: BookingId,
    #[serde(default)]
    pub hotel: BookingHotel,
    pub check_in_date: String,
    pub check_out_date: String,
    pub no_of_rooms: u32,
    /// Controlled by the server ("confirmed", "cancelled", ...)
    pub status: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct BookingHotel {
    pub name: String,
    pub location: String,
}

impl Booking {
    /// Text shown for one entry of the list.
    pub fn summary(&self) -> String {
        format!(
            "No Of Rooms: {}, Check-in: {}, Check-out: {}, status: {}",
            self.no_of_rooms, self.check_in_date, self.check_out_date, self.status
        )
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingsData {
    pub bookings: Vec<Booking>,
}

/// Detail payload is kept as a raw object so keys can be mapped
/// regardless of the casing the server used.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingDetailData {
    pub booking: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiEnvelope;
    use serde_json::json;

    fn list_body() -> Value {
        json!({
            "data": { "bookings": [{
                "id": 1,
                "hotel": { "name": "A", "location": "X" },
                "check_in_date": "2024-01-01",
                "check_out_date": "2024-01-03",
                "no_of_rooms": 2,
                "status": "confirmed"
            }]}
        })
    }

    #[test]
    fn decodes_list_envelope() {
        let data: ApiEnvelope<BookingsData> = serde_json::from_value(list_body()).unwrap();
        let bookings = data.into_inner().bookings;

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, 1);
        assert_eq!(bookings[0].hotel.name, "A");
        assert_eq!(bookings[0].hotel.location, "X");
    }

    #[test]
    fn summary_matches_list_item_text() {
        let data: ApiEnvelope<BookingsData> = serde_json::from_value(list_body()).unwrap();
        let booking = &data.data.bookings[0];

        assert_eq!(
            booking.summary(),
            "No Of Rooms: 2, Check-in: 2024-01-01, Check-out: 2024-01-03, status: confirmed"
        );
    }

    #[test]
    fn missing_hotel_defaults_to_empty_summary() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 9,
            "check_in_date": "2024-02-01",
            "check_out_date": "2024-02-02",
            "no_of_rooms": 1,
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(booking.hotel, BookingHotel::default());
    }

    #[test]
    fn detail_keeps_raw_fields() {
        let body = json!({ "data": { "booking": { "hotel_id": 5, "noOfRooms": 3 } } });
        let detail: ApiEnvelope<BookingDetailData> = serde_json::from_value(body).unwrap();
        let booking = detail.into_inner().booking;

        assert_eq!(booking.get("hotel_id"), Some(&json!(5)));
        assert_eq!(booking.get("noOfRooms"), Some(&json!(3)));
    }
}
