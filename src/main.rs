// ============================================================================
// HOTEL BOOKINGS - Yew frontend
// ============================================================================
// - components: function components (list, item, form)
// - hooks: data fetching + intents, dispatching into stores
// - stores: pure reducers for view state
// - services: HTTP only
// - models: wire types and the form field mapping
// ============================================================================

mod components;
mod config;
mod error;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;

use components::{App, AppProps};
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    let config = config.with_location_overrides();
    log::info!(
        "🏨 Hotel bookings starting (api: {}, user: {})",
        config.api_base_url,
        config.user_id
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
