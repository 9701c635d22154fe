use yew::prelude::*;

use super::BookingList;
use crate::config::AppConfig;
use crate::services::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let api = ApiClient::new(props.config.api_base_url.clone());

    html! {
        <main class="app">
            <BookingList api={api} user_id={props.config.user_id} />
        </main>
    }
}
