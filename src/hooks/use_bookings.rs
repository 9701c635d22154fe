// ============================================================================
// USE BOOKINGS HOOK - Bookings of one user + list intents
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::use_request_sequencer::{use_request_sequencer, SequencerHandle};
use crate::error::Operation;
use crate::models::{BookingId, UserId};
use crate::services::ApiClient;
use crate::stores::{BookingsAction, BookingsStore};
use crate::utils::NOTICE_TIMEOUT_MS;

pub struct UseBookingsHandle {
    pub state: UseReducerHandle<BookingsStore>,
    pub refresh: Callback<()>,
    pub open_new: Callback<()>,
    pub open_edit: Callback<BookingId>,
    pub close_form: Callback<()>,
    pub remove: Callback<BookingId>,
    pub dismiss_notice: Callback<()>,
}

fn fetch_bookings(
    api: ApiClient,
    user_id: UserId,
    sequencer: SequencerHandle,
    dispatcher: UseReducerDispatcher<BookingsStore>,
) {
    let token = sequencer.borrow_mut().issue();
    wasm_bindgen_futures::spawn_local(async move {
        let result = api.list_bookings(user_id).await;
        if !sequencer.borrow().is_current(token) {
            log::debug!("⏭️ Dropping stale bookings response for user {}", user_id);
            return;
        }
        match result {
            Ok(bookings) => dispatcher.dispatch(BookingsAction::Loaded(bookings)),
            Err(e) => {
                let message = Operation::ListBookings.report(&e);
                dispatcher.dispatch(BookingsAction::LoadFailed(message));
            }
        }
    });
}

#[hook]
pub fn use_bookings(api: ApiClient, user_id: UserId) -> UseBookingsHandle {
    let state = use_reducer(BookingsStore::default);
    let requests = use_request_sequencer();

    // Load on mount and whenever the user or API origin changes
    {
        let dispatcher = state.dispatcher();
        let requests = requests.clone();
        use_effect_with((api.clone(), user_id), move |(api, user_id)| {
            dispatcher.dispatch(BookingsAction::Reset);
            fetch_bookings(api.clone(), *user_id, requests, dispatcher);
            || ()
        });
    }

    // Delete notices go away on their own
    {
        let dispatcher = state.dispatcher();
        use_effect_with((state.notice.clone(), state.notice_seq), move |(notice, _)| {
            let timeout = notice.as_ref().map(|_| {
                Timeout::new(NOTICE_TIMEOUT_MS, move || {
                    dispatcher.dispatch(BookingsAction::DismissNotice);
                })
            });
            move || drop(timeout)
        });
    }

    let refresh = {
        let api = api.clone();
        let requests = requests.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            log::info!("🔄 Refreshing bookings for user {}", user_id);
            fetch_bookings(api.clone(), user_id, requests.clone(), dispatcher.clone());
        })
    };

    let remove = {
        let requests = requests.clone();
        let dispatcher = state.dispatcher();
        let generation = state.generation;
        Callback::from(move |booking_id: BookingId| {
            let api = api.clone();
            let requests = requests.clone();
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.delete_booking(user_id, booking_id).await;
                if !requests.borrow().is_open() {
                    log::debug!("⏭️ List unmounted, ignoring delete of booking {}", booking_id);
                    return;
                }
                match result {
                    Ok(_) => dispatcher.dispatch(BookingsAction::Removed {
                        booking_id,
                        generation,
                    }),
                    Err(e) => {
                        let message = Operation::DeleteBooking.report(&e);
                        dispatcher.dispatch(BookingsAction::RemoveFailed { message, generation });
                    }
                }
            });
        })
    };

    let open_new = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(BookingsAction::OpenNew))
    };

    let open_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: BookingId| dispatcher.dispatch(BookingsAction::OpenEdit(id)))
    };

    let close_form = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(BookingsAction::CloseForm))
    };

    let dismiss_notice = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(BookingsAction::DismissNotice))
    };

    UseBookingsHandle {
        state,
        refresh,
        open_new,
        open_edit,
        close_form,
        remove,
        dismiss_notice,
    }
}
