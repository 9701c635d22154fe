// ============================================================================
// API CLIENT - HTTP only (stateless apart from the base URL)
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::endpoints::{Endpoint, HttpMethod};
use crate::error::ApiError;
use crate::models::{
    ApiEnvelope, Booking, BookingDetailData, BookingId, BookingsData, Hotel, HotelsData, UserId,
    WirePayload,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// GET the bookings belonging to a user
    pub async fn list_bookings(&self, user_id: UserId) -> Result<Vec<Booking>, ApiError> {
        log::info!("📋 Fetching bookings for user {}", user_id);
        let data: BookingsData = self.read(Endpoint::ListBookings { user_id }).await?;
        log::info!("✅ {} bookings loaded", data.bookings.len());
        Ok(data.bookings)
    }

    /// GET one booking, raw so the caller can map its keys
    pub async fn get_booking(
        &self,
        user_id: UserId,
        booking_id: BookingId,
    ) -> Result<WirePayload, ApiError> {
        log::info!("🔍 Fetching booking {} for user {}", booking_id, user_id);
        let data: BookingDetailData = self
            .read(Endpoint::GetBooking { user_id, booking_id })
            .await?;
        Ok(data.booking)
    }

    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        log::info!("🏨 Fetching hotel catalog");
        let data: HotelsData = self.read(Endpoint::ListHotels).await?;
        Ok(data.hotels)
    }

    /// POST a new booking or PUT an existing one. Returns the response text.
    pub async fn save_booking(
        &self,
        user_id: UserId,
        booking_id: Option<BookingId>,
        payload: &WirePayload,
    ) -> Result<String, ApiError> {
        let endpoint = Endpoint::for_submit(user_id, booking_id);
        let body = self.write(endpoint, Some(payload)).await?;
        match booking_id {
            Some(id) => log::info!("✅ Booking {} updated. API response: {}", id, body),
            None => log::info!("✅ Booking created. API response: {}", body),
        }
        Ok(body)
    }

    pub async fn delete_booking(
        &self,
        user_id: UserId,
        booking_id: BookingId,
    ) -> Result<String, ApiError> {
        let body = self
            .write(Endpoint::DeleteBooking { user_id, booking_id }, None)
            .await?;
        log::info!("🗑️ Booking {} removed. API response: {}", booking_id, body);
        Ok(body)
    }

    async fn read<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let response = self.send(endpoint, None).await?;
        response
            .json::<ApiEnvelope<T>>()
            .await
            .map(ApiEnvelope::into_inner)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // Write responses may be empty (204), so they are only read as text.
    async fn write(
        &self,
        endpoint: Endpoint,
        payload: Option<&WirePayload>,
    ) -> Result<String, ApiError> {
        let response = self.send(endpoint, payload).await?;
        Ok(response.text().await?)
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        payload: Option<&WirePayload>,
    ) -> Result<Response, ApiError> {
        let url = endpoint.url(&self.base_url);
        let builder = match endpoint.method() {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };

        let response = match payload {
            Some(payload) => {
                builder
                    .json(payload)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await?
            }
            None => builder.send().await?,
        };

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(ApiError::Http { status, body });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_configured_base_url() {
        let api = ApiClient::new("http://bookings.local:8080/");
        assert_eq!(api.base_url, "http://bookings.local:8080/");
        assert_eq!(
            Endpoint::ListHotels.url(&api.base_url),
            "http://bookings.local:8080/api/v1/hotels"
        );
    }

    #[test]
    fn clients_compare_by_base_url() {
        assert_eq!(ApiClient::new("http://a"), ApiClient::new("http://a"));
        assert_ne!(ApiClient::new("http://a"), ApiClient::new("http://b"));
    }
}
