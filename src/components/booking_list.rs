use yew::prelude::*;

use super::{BookingForm, BookingItem};
use crate::hooks::use_bookings;
use crate::models::{UserId, WirePayload};
use crate::services::ApiClient;
use crate::stores::ListView;

#[derive(Properties, PartialEq, Clone)]
pub struct BookingListProps {
    pub api: ApiClient,
    pub user_id: UserId,
}

#[function_component(BookingList)]
pub fn booking_list(props: &BookingListProps) -> Html {
    let handle = use_bookings(props.api.clone(), props.user_id);
    let store = &*handle.state;

    let items = match store.view() {
        ListView::Failed(message) => return html! { <p class="error">{ message.to_string() }</p> },
        ListView::Loading => return html! { <p class="loading">{"Loading..."}</p> },
        ListView::Ready(items) => items,
    };

    // Saving does not refresh the list; "Refresh" re-fetches on demand.
    let on_saved = {
        let user_id = props.user_id;
        Callback::from(move |payload: WirePayload| {
            log::info!("💾 Booking saved for user {}: {:?}", user_id, payload);
        })
    };

    let form = store.form.is_visible().then(|| {
        let booking_id = store.form.booking_id();
        let key = booking_id.map_or_else(|| "new".to_string(), |id| format!("edit-{}", id));
        html! {
            <BookingForm
                key={key}
                api={props.api.clone()}
                user_id={props.user_id}
                booking_id={booking_id}
                on_submit={on_saved}
                on_cancel={Some(handle.close_form.clone())}
            />
        }
    });

    html! {
        <div class="booking-list">
            <h1>{"User Bookings"}</h1>
            <div class="toolbar">
                <button class="btn-new" onclick={handle.open_new.reform(|_: MouseEvent| ())}>
                    {"New Booking"}
                </button>
                <button class="btn-refresh" onclick={handle.refresh.reform(|_: MouseEvent| ())}>
                    {"Refresh"}
                </button>
            </div>

            if let Some(notice) = &store.notice {
                <p class="notice" onclick={handle.dismiss_notice.reform(|_: MouseEvent| ())}>
                    { notice.clone() }
                </p>
            }

            { form }

            <ul>
                { for items.iter().map(|booking| html! {
                    <BookingItem
                        key={booking.id.to_string()}
                        booking={booking.clone()}
                        on_edit={handle.open_edit.clone()}
                        on_remove={handle.remove.clone()}
                    />
                }) }
            </ul>
        </div>
    }
}
