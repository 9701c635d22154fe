pub mod booking_form_store;
pub mod bookings_store;
pub mod request_sequencer;

pub use booking_form_store::{BookingFormAction, BookingFormStore, FormView};
pub use bookings_store::{BookingsAction, BookingsStore, ListView};
pub use request_sequencer::RequestSequencer;
