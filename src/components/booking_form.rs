use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_booking_form;
use crate::models::{BookingId, FormField, UserId, WirePayload};
use crate::services::ApiClient;
use crate::stores::FormView;

#[derive(Properties, PartialEq, Clone)]
pub struct BookingFormProps {
    pub api: ApiClient,
    pub user_id: UserId,
    /// Present when editing an existing booking
    #[prop_or_default]
    pub booking_id: Option<BookingId>,
    /// Called with the snake_case payload after a successful save
    pub on_submit: Callback<WirePayload>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let handle = use_booking_form(
        props.api.clone(),
        props.user_id,
        props.booking_id,
        props.on_submit.clone(),
    );
    let store = &*handle.state;

    match store.view() {
        FormView::Failed(message) => return html! { <p class="error">{ message.to_string() }</p> },
        FormView::Loading => return html! { <p class="loading">{"Loading..."}</p> },
        FormView::Ready => {}
    }

    let on_input = {
        let cb = handle.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit((input.name(), input.value()));
            }
        })
    };

    let on_select = {
        let cb = handle.on_input.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit((select.name(), select.value()));
            }
        })
    };

    let cancel = props.on_cancel.clone().map(|cb| {
        html! {
            <button type="button" class="btn-cancel" onclick={cb.reform(|_: MouseEvent| ())}>
                {"Cancel"}
            </button>
        }
    });

    let form = &store.form;
    let submit_label = if store.is_editing() { "Update Booking" } else { "Book Room" };

    html! {
        <form class="booking-form" onsubmit={handle.on_submit.clone()}>
            if let Some(error) = &store.submit_error {
                <p class="error">{ error.clone() }</p>
            }

            <label>
                {"Select Hotel:"}
                <select name={FormField::HotelId.name()} onchange={on_select} required=true>
                    <option value="0" disabled=true selected={form.hotel_id == 0}>
                        {"Select a hotel"}
                    </option>
                    { for store.hotels().iter().map(|hotel| html! {
                        <option
                            key={hotel.id.to_string()}
                            value={hotel.id.to_string()}
                            selected={hotel.id == form.hotel_id}
                        >
                            { hotel.name.clone() }
                        </option>
                    }) }
                </select>
            </label>

            <label>
                {"Number of Rooms:"}
                <input
                    type="number"
                    name={FormField::NoOfRooms.name()}
                    value={form.input_value(FormField::NoOfRooms)}
                    oninput={on_input.clone()}
                    min="1"
                    required=true
                />
            </label>

            <label>
                {"Check-in Date:"}
                <input
                    type="date"
                    name={FormField::CheckInDate.name()}
                    value={form.input_value(FormField::CheckInDate)}
                    oninput={on_input.clone()}
                    required=true
                />
            </label>

            <label>
                {"Check-out Date:"}
                <input
                    type="date"
                    name={FormField::CheckOutDate.name()}
                    value={form.input_value(FormField::CheckOutDate)}
                    min={form.check_in_date.clone()}
                    oninput={on_input}
                    required=true
                />
            </label>

            <button type="submit" class="btn-submit">{ submit_label }</button>
            { cancel }
        </form>
    }
}
