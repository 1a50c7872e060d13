use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use crate::shared::data::Store;
use leptos::prelude::*;
use thaw::Spinner;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Invalid embedded config, using defaults: {}", e);
        AppConfig::default()
    });

    // Provide the Store to the whole app via context.
    let store = Store::new(&config.data);
    provide_context(store.clone());

    let is_loaded = store.is_loaded();
    wasm_bindgen_futures::spawn_local(async move {
        store.load().await;
    });

    view! {
        <Show
            when=move || is_loaded.get()
            fallback=|| view! { <div class="App-loading"><Spinner /></div> }
        >
            <AppRoutes />
        </Show>
    }
}
