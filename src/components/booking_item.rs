use yew::prelude::*;

use crate::models::{Booking, BookingId};

#[derive(Properties, PartialEq, Clone)]
pub struct BookingItemProps {
    pub booking: Booking,
    pub on_edit: Callback<BookingId>,
    pub on_remove: Callback<BookingId>,
}

#[function_component(BookingItem)]
pub fn booking_item(props: &BookingItemProps) -> Html {
    let id = props.booking.id;
    let edit = props.on_edit.reform(move |_: MouseEvent| id);
    let remove = props.on_remove.reform(move |_: MouseEvent| id);

    html! {
        <li class="booking-item">
            <span class="booking-summary">{ props.booking.summary() }</span>
            <button class="btn-edit" onclick={edit}>{"Edit"}</button>
            <button class="btn-remove" onclick={remove}>{"Remove"}</button>
        </li>
    }
}
