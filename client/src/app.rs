//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::location_modal::LocationModal;
use crate::net::types::LocationData;
use crate::util::storage::{BrowserStorage, load_location};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the confirmed location as context and mounts the modal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let location = RwSignal::new(None::<LocationData>);
    provide_context(location);

    // Restore a location confirmed on a previous visit.
    Effect::new(move || {
        if let Some(saved) = load_location(&BrowserStorage) {
            location.set(Some(saved));
        }
    });

    let on_location_confirmed = Callback::new(move |loc: LocationData| location.set(Some(loc)));

    let label = move || {
        location.with(|l| {
            l.as_ref()
                .map_or_else(|| "Localização não definida".to_owned(), |l| format!("{}, {}", l.city, l.region_name))
        })
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/locator.css"/>
        <Title text="Locator"/>

        <header class="app-header">
            <span class="app-header__location">"📍 " {label}</span>
        </header>
        <LocationModal on_location_confirmed=on_location_confirmed/>
    }
}
