//! Shopping Lists Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let (config, lists) = shoplist_core::initial_store_or_empty();
    logging::set_level(config.log_level);

    mount_to_body(move || view! { <App lists=lists /> });
}
