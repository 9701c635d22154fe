// ============================================================================
// BOOKING FORM STORE - Editable state of the create/edit form
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{BookingId, FormData, Hotel, WirePayload};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailState {
    /// Creating, nothing to fetch
    NotRequested,
    Pending,
    Loaded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingFormStore {
    pub booking_id: Option<BookingId>,
    pub form: FormData,
    pub hotels: Option<Vec<Hotel>>,
    pub detail: DetailState,
    /// Hotel or detail fetch failed; replaces the form
    pub fetch_error: Option<String>,
    /// Last submit failed; shown next to the form
    pub submit_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingFormAction {
    Reset(Option<BookingId>),
    HotelsLoaded(Vec<Hotel>),
    DetailLoaded(WirePayload),
    FetchFailed(String),
    Input { name: String, value: String },
    SubmitSucceeded,
    SubmitFailed(String),
}

#[derive(Debug, PartialEq)]
pub enum FormView<'a> {
    Failed(&'a str),
    Loading,
    Ready,
}

impl BookingFormStore {
    pub fn new(booking_id: Option<BookingId>) -> Self {
        Self {
            booking_id,
            form: FormData::default(),
            hotels: None,
            detail: if booking_id.is_some() {
                DetailState::Pending
            } else {
                DetailState::NotRequested
            },
            fetch_error: None,
            submit_error: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.booking_id.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.hotels.is_none() || self.detail == DetailState::Pending
    }

    pub fn view(&self) -> FormView<'_> {
        if let Some(error) = &self.fetch_error {
            FormView::Failed(error)
        } else if self.is_loading() {
            FormView::Loading
        } else {
            FormView::Ready
        }
    }

    pub fn hotels(&self) -> &[Hotel] {
        self.hotels.as_deref().unwrap_or_default()
    }

    pub fn apply(&mut self, action: BookingFormAction) {
        match action {
            BookingFormAction::Reset(booking_id) => *self = BookingFormStore::new(booking_id),
            BookingFormAction::HotelsLoaded(hotels) => self.hotels = Some(hotels),
            BookingFormAction::DetailLoaded(detail) => {
                self.form = FormData::from_wire(&detail);
                self.detail = DetailState::Loaded;
            }
            BookingFormAction::FetchFailed(message) => {
                // First failure is the one worth showing
                self.fetch_error.get_or_insert(message);
            }
            BookingFormAction::Input { name, value } => {
                if let Err(e) = self.form.apply_input(&name, &value) {
                    log::warn!("⚠️ Ignoring input: {}", e);
                }
            }
            BookingFormAction::SubmitSucceeded => self.submit_error = None,
            BookingFormAction::SubmitFailed(message) => self.submit_error = Some(message),
        }
    }
}

impl Reducible for BookingFormStore {
    type Action = BookingFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hotels() -> Vec<Hotel> {
        vec![
            Hotel { id: 1, name: "Seaside".into() },
            Hotel { id: 2, name: "Alpine".into() },
        ]
    }

    fn input(name: &str, value: &str) -> BookingFormAction {
        BookingFormAction::Input { name: name.into(), value: value.into() }
    }

    #[test]
    fn create_form_waits_only_for_hotels() {
        let mut store = BookingFormStore::new(None);
        assert_eq!(store.view(), FormView::Loading);

        store.apply(BookingFormAction::HotelsLoaded(hotels()));
        assert_eq!(store.view(), FormView::Ready);
        assert!(!store.is_editing());
        assert_eq!(store.form, FormData::default());
    }

    #[test]
    fn edit_form_waits_for_hotels_and_detail() {
        let mut store = BookingFormStore::new(Some(8));
        store.apply(BookingFormAction::HotelsLoaded(hotels()));
        assert_eq!(store.view(), FormView::Loading);

        let detail = json!({
            "id": 8,
            "hotel_id": 2,
            "no_of_rooms": 3,
            "check_in_date": "2024-06-01",
            "check_out_date": "2024-06-05",
            "status": "confirmed"
        });
        store.apply(BookingFormAction::DetailLoaded(detail.as_object().unwrap().clone()));

        assert_eq!(store.view(), FormView::Ready);
        assert_eq!(
            store.form,
            FormData {
                hotel_id: 2,
                no_of_rooms: 3,
                check_in_date: "2024-06-01".into(),
                check_out_date: "2024-06-05".into(),
            }
        );
    }

    #[test]
    fn fetch_failure_replaces_form_even_while_loading() {
        let mut store = BookingFormStore::new(Some(8));
        store.apply(BookingFormAction::FetchFailed("Error fetching booking details".into()));
        store.apply(BookingFormAction::FetchFailed("Error fetching hotels".into()));

        assert_eq!(store.view(), FormView::Failed("Error fetching booking details"));
    }

    #[test]
    fn edits_update_named_field() {
        let mut store = BookingFormStore::new(None);
        store.apply(BookingFormAction::HotelsLoaded(hotels()));
        store.apply(input("hotelId", "2"));
        store.apply(input("noOfRooms", "4"));
        store.apply(input("checkInDate", "2024-07-01"));

        assert_eq!(store.form.hotel_id, 2);
        assert_eq!(store.form.no_of_rooms, 4);
        assert_eq!(store.form.check_in_date, "2024-07-01");
    }

    #[test]
    fn bad_edit_is_ignored() {
        let mut store = BookingFormStore::new(None);
        store.apply(input("noOfRooms", "abc"));
        assert_eq!(store.form.no_of_rooms, 1);
    }

    #[test]
    fn submit_error_keeps_form_ready() {
        let mut store = BookingFormStore::new(None);
        store.apply(BookingFormAction::HotelsLoaded(hotels()));
        store.apply(input("noOfRooms", "2"));
        store.apply(BookingFormAction::SubmitFailed("Error submitting form".into()));

        assert_eq!(store.view(), FormView::Ready);
        assert_eq!(store.submit_error.as_deref(), Some("Error submitting form"));
        assert_eq!(store.form.no_of_rooms, 2);

        store.apply(BookingFormAction::SubmitSucceeded);
        assert!(store.submit_error.is_none());
    }

    #[test]
    fn reset_switches_booking() {
        let mut store = BookingFormStore::new(None);
        store.apply(BookingFormAction::HotelsLoaded(hotels()));
        store.apply(BookingFormAction::Reset(Some(3)));

        assert!(store.is_editing());
        assert_eq!(store.detail, DetailState::Pending);
        assert!(store.hotels().is_empty());
    }
}
