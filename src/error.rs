// ============================================================================
// ERRORS - One reporting contract for every API operation
// ============================================================================

use thiserror::Error;

/// Failure of a single HTTP exchange with the bookings API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// User-visible operations. Each one maps a failure to a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListBookings,
    ListHotels,
    GetBooking,
    SaveBooking,
    DeleteBooking,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListBookings => "Error fetching bookings",
            Operation::ListHotels => "Error fetching hotels",
            Operation::GetBooking => "Error fetching booking details",
            Operation::SaveBooking => "Error submitting form",
            Operation::DeleteBooking => "Error removing booking",
        }
    }

    /// Log the underlying cause and hand back the message to display.
    pub fn report(self, err: &ApiError) -> String {
        log::error!("❌ {}: {}", self.failure_message(), err);
        self.failure_message().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = ApiError::Http { status: 404, body: "Not Found".into() };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn every_operation_has_a_distinct_message() {
        let ops = [
            Operation::ListBookings,
            Operation::ListHotels,
            Operation::GetBooking,
            Operation::SaveBooking,
            Operation::DeleteBooking,
        ];
        let mut messages: Vec<_> = ops.iter().map(|op| op.failure_message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), ops.len());
    }

    #[test]
    fn report_returns_the_operation_message() {
        let err = ApiError::Network("offline".into());
        assert_eq!(Operation::ListBookings.report(&err), "Error fetching bookings");
        assert_eq!(Operation::SaveBooking.report(&err), "Error submitting form");
    }
}
