pub mod use_booking_form;
pub mod use_bookings;
pub mod use_request_sequencer;

pub use use_booking_form::use_booking_form;
pub use use_bookings::use_bookings;
