use crate::models::{BookingId, UserId};
use crate::utils::API_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Every REST call the client makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListBookings { user_id: UserId },
    GetBooking { user_id: UserId, booking_id: BookingId },
    CreateBooking { user_id: UserId },
    UpdateBooking { user_id: UserId, booking_id: BookingId },
    DeleteBooking { user_id: UserId, booking_id: BookingId },
    ListHotels,
}

impl Endpoint {
    /// Target of a form submit: update when editing, create otherwise.
    pub fn for_submit(user_id: UserId, booking_id: Option<BookingId>) -> Self {
        match booking_id {
            Some(booking_id) => Endpoint::UpdateBooking { user_id, booking_id },
            None => Endpoint::CreateBooking { user_id },
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::ListBookings { .. } | Endpoint::GetBooking { .. } | Endpoint::ListHotels => {
                HttpMethod::Get
            }
            Endpoint::CreateBooking { .. } => HttpMethod::Post,
            Endpoint::UpdateBooking { .. } => HttpMethod::Put,
            Endpoint::DeleteBooking { .. } => HttpMethod::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::ListBookings { user_id } | Endpoint::CreateBooking { user_id } => {
                format!("{}/users/{}/bookings", API_PREFIX, user_id)
            }
            Endpoint::GetBooking { user_id, booking_id }
            | Endpoint::UpdateBooking { user_id, booking_id }
            | Endpoint::DeleteBooking { user_id, booking_id } => {
                format!("{}/users/{}/bookings/{}", API_PREFIX, user_id, booking_id)
            }
            Endpoint::ListHotels => format!("{}/hotels", API_PREFIX),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_without_booking_creates() {
        let endpoint = Endpoint::for_submit(7, None);
        assert_eq!(endpoint, Endpoint::CreateBooking { user_id: 7 });
        assert_eq!(endpoint.method(), HttpMethod::Post);
        assert_eq!(endpoint.path(), "/api/v1/users/7/bookings");
    }

    #[test]
    fn submit_with_booking_updates_that_booking() {
        let endpoint = Endpoint::for_submit(7, Some(42));
        assert_eq!(endpoint.method(), HttpMethod::Put);
        assert_eq!(endpoint.path(), "/api/v1/users/7/bookings/42");
    }

    #[test]
    fn read_and_delete_routes() {
        assert_eq!(Endpoint::ListBookings { user_id: 1 }.method(), HttpMethod::Get);
        assert_eq!(
            Endpoint::GetBooking { user_id: 1, booking_id: 2 }.path(),
            "/api/v1/users/1/bookings/2"
        );
        let delete = Endpoint::DeleteBooking { user_id: 1, booking_id: 2 };
        assert_eq!(delete.method(), HttpMethod::Delete);
        assert_eq!(delete.path(), "/api/v1/users/1/bookings/2");
        assert_eq!(Endpoint::ListHotels.path(), "/api/v1/hotels");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let endpoint = Endpoint::ListHotels;
        assert_eq!(endpoint.url("http://localhost:3000"), "http://localhost:3000/api/v1/hotels");
        assert_eq!(endpoint.url("https://api.example.com/"), "https://api.example.com/api/v1/hotels");
    }
}
