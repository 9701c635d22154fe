pub mod booking;
pub mod envelope;
pub mod form_data;
pub mod hotel;

pub use booking::{Booking, BookingDetailData, BookingsData};
pub use envelope::ApiEnvelope;
pub use form_data::{FormData, FormField, WirePayload};
pub use hotel::{Hotel, HotelsData};

pub type UserId = u64;
pub type BookingId = u64;
pub type HotelId = u64;
