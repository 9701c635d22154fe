// ============================================================================
// USE BOOKING FORM HOOK - Hotel catalog, booking detail, edits and submit
// ============================================================================

use yew::prelude::*;

use super::use_request_sequencer::{use_request_sequencer, SequencerHandle};
use crate::error::Operation;
use crate::models::{BookingId, UserId, WirePayload};
use crate::services::ApiClient;
use crate::stores::{BookingFormAction, BookingFormStore};

pub struct UseBookingFormHandle {
    pub state: UseReducerHandle<BookingFormStore>,
    /// `(input name, raw value)`
    pub on_input: Callback<(String, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

fn fetch_hotels(
    api: ApiClient,
    sequencer: SequencerHandle,
    dispatcher: UseReducerDispatcher<BookingFormStore>,
) {
    let token = sequencer.borrow_mut().issue();
    wasm_bindgen_futures::spawn_local(async move {
        let result = api.list_hotels().await;
        if !sequencer.borrow().is_current(token) {
            log::debug!("⏭️ Dropping stale hotel catalog");
            return;
        }
        match result {
            Ok(hotels) => dispatcher.dispatch(BookingFormAction::HotelsLoaded(hotels)),
            Err(e) => {
                let message = Operation::ListHotels.report(&e);
                dispatcher.dispatch(BookingFormAction::FetchFailed(message));
            }
        }
    });
}

fn fetch_detail(
    api: ApiClient,
    user_id: UserId,
    booking_id: BookingId,
    sequencer: SequencerHandle,
    dispatcher: UseReducerDispatcher<BookingFormStore>,
) {
    let token = sequencer.borrow_mut().issue();
    wasm_bindgen_futures::spawn_local(async move {
        let result = api.get_booking(user_id, booking_id).await;
        if !sequencer.borrow().is_current(token) {
            log::debug!("⏭️ Dropping stale detail of booking {}", booking_id);
            return;
        }
        match result {
            Ok(detail) => dispatcher.dispatch(BookingFormAction::DetailLoaded(detail)),
            Err(e) => {
                let message = Operation::GetBooking.report(&e);
                dispatcher.dispatch(BookingFormAction::FetchFailed(message));
            }
        }
    });
}

#[hook]
pub fn use_booking_form(
    api: ApiClient,
    user_id: UserId,
    booking_id: Option<BookingId>,
    on_saved: Callback<WirePayload>,
) -> UseBookingFormHandle {
    let state = use_reducer(move || BookingFormStore::new(booking_id));
    let hotel_requests = use_request_sequencer();
    let detail_requests = use_request_sequencer();

    {
        let dispatcher = state.dispatcher();
        let hotel_requests = hotel_requests.clone();
        use_effect_with(
            (api.clone(), user_id, booking_id),
            move |(api, user_id, booking_id)| {
                dispatcher.dispatch(BookingFormAction::Reset(*booking_id));
                fetch_hotels(api.clone(), hotel_requests, dispatcher.clone());
                if let Some(booking_id) = *booking_id {
                    fetch_detail(api.clone(), *user_id, booking_id, detail_requests, dispatcher);
                }
                || ()
            },
        );
    }

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(name, value): (String, String)| {
            dispatcher.dispatch(BookingFormAction::Input { name, value });
        })
    };

    let on_submit = {
        let form = state.form.clone();
        let dispatcher = state.dispatcher();
        // Closed together with the other sequencers on unmount
        let mounted = hotel_requests;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = form.to_wire();
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let mounted = mounted.clone();
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.save_booking(user_id, booking_id, &payload).await;
                if !mounted.borrow().is_open() {
                    log::debug!("⏭️ Form unmounted, ignoring submit result");
                    return;
                }
                match result {
                    Ok(_) => {
                        dispatcher.dispatch(BookingFormAction::SubmitSucceeded);
                        on_saved.emit(payload);
                    }
                    Err(e) => {
                        let message = Operation::SaveBooking.report(&e);
                        dispatcher.dispatch(BookingFormAction::SubmitFailed(message));
                    }
                }
            });
        })
    };

    UseBookingFormHandle {
        state,
        on_input,
        on_submit,
    }
}
