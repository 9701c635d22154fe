pub mod app;
pub mod booking_form;
pub mod booking_item;
pub mod booking_list;

pub use app::{App, AppProps};
pub use booking_form::BookingForm;
pub use booking_item::BookingItem;
pub use booking_list::BookingList;
