//! Modal that detects or collects the visitor's city/region.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the app shell. On first client render it checks storage
//! for a previously confirmed location; if none exists it asks
//! `/api/detect-location` and lets the user confirm the result or type a
//! location by hand. The confirmed value is saved and handed to the parent.
//!
//! Detection failures never reach the UI: they resolve to the fallback
//! location and are only logged.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::types::LocationData;
use crate::state::location::{InitOutcome, LocationModalState, ModalView, view_memo};
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Location confirmation dialog.
///
/// `store` defaults to `window.localStorage`.
#[component]
pub fn LocationModal(
    on_location_confirmed: Callback<LocationData>,
    #[prop(optional)] store: Option<Arc<dyn KeyValueStore>>,
) -> impl IntoView {
    let store: Arc<dyn KeyValueStore> = store.unwrap_or_else(|| Arc::new(BrowserStorage));
    let store = StoredValue::new(store);
    let state = RwSignal::new(LocationModalState::default());
    let mode = view_memo(state);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Cleared on teardown so a late detection response is dropped.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    // Effects only run in the browser, matching where storage lives.
    Effect::new(move || {
        let mut next = state.get_untracked();
        let outcome = store.with_value(|s| next.initialize(s.as_ref()));
        if outcome == InitOutcome::AlreadySaved {
            state.set(next);
            return;
        }
        next.begin_detect();
        state.set(next);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                log::info!("detecting location via server");
                let outcome = crate::net::api::detect_location().await;
                let applied = state
                    .try_update(|s| crate::state::location::apply_if_alive(&alive, s, outcome))
                    .flatten();
                if let Some(resolution) = applied {
                    log_resolution(&resolution, state);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &alive;
        }
    });

    // Focus the dialog when it opens so Escape works without tabbing in.
    Effect::new(move || {
        if !mode.get().is_open() {
            return;
        }
        if let Some(el) = dialog_ref.get() {
            #[cfg(feature = "hydrate")]
            {
                let _ = el.focus();
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = el;
            }
        }
    });

    let emit = move |location: Option<LocationData>| {
        if let Some(location) = location {
            on_location_confirmed.run(location);
        }
    };

    let on_confirm = move |_| {
        let confirmed = store.with_value(|s| {
            state
                .try_update(|st| {
                    let mut out = None;
                    st.confirm(s.as_ref(), |loc| out = Some(loc));
                    out
                })
                .flatten()
        });
        emit(confirmed);
    };

    let on_manual_submit = move |_| {
        let confirmed = store.with_value(|s| {
            state
                .try_update(|st| {
                    let mut out = None;
                    st.submit_manual(s.as_ref(), |loc| out = Some(loc));
                    out
                })
                .flatten()
        });
        emit(confirmed);
    };

    let on_choose_other = move |_| state.update(LocationModalState::choose_other);
    let on_back = move |_| state.update(LocationModalState::back_to_detected);
    let on_backdrop = move |_| state.update(LocationModalState::dismiss);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            state.update(LocationModalState::dismiss);
        }
    };

    let body = move || match mode.get() {
        ModalView::Loading => view! {
            <div class="location-modal__loading">
                <span class="location-modal__spinner"></span>
                <p class="location-modal__muted">"Detectando sua localização..."</p>
            </div>
        }
        .into_any(),
        ModalView::ManualEntry => view! {
            <div class="location-modal__manual">
                <h3 class="location-modal__heading">"Escolha sua localização"</h3>
                <input
                    class="dialog__input location-modal__input"
                    type="text"
                    placeholder="Digite sua cidade"
                    prop:value=move || state.with(|s| s.manual_city.clone())
                    on:input=move |ev| state.update(|s| s.set_manual_city(event_target_value(&ev)))
                />
                <input
                    class="dialog__input location-modal__input"
                    type="text"
                    placeholder="Digite seu estado"
                    prop:value=move || state.with(|s| s.manual_region.clone())
                    on:input=move |ev| state.update(|s| s.set_manual_region(event_target_value(&ev)))
                />
                <div class="dialog__actions">
                    <button class="btn" on:click=on_back>"Voltar"</button>
                    <button
                        class="btn btn--primary"
                        on:click=on_manual_submit
                        disabled=move || !state.with(LocationModalState::can_submit_manual)
                    >
                        "Confirmar"
                    </button>
                </div>
            </div>
        }
        .into_any(),
        ModalView::Detected => {
            let city = move || state.with(|s| s.location.as_ref().map(|l| l.city.clone()).unwrap_or_default());
            let region =
                move || state.with(|s| s.location.as_ref().map(|l| l.region_name.clone()).unwrap_or_default());
            view! {
                <div class="location-modal__detected">
                    <h3 class="location-modal__heading">"Detectamos sua localização!"</h3>
                    <p class="location-modal__city">{city}</p>
                    <p class="location-modal__muted">{region}</p>
                    <p class="location-modal__question">"Essa é sua localização atual?"</p>
                    <div class="location-modal__stack">
                        <button class="btn btn--primary" on:click=on_confirm>
                            "Sim, confirmar localização"
                        </button>
                        <button class="btn" on:click=on_choose_other>
                            "Não, escolher outro local"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
        ModalView::Hidden | ModalView::Empty => ().into_any(),
    };

    view! {
        <Show when=move || mode.get().is_open()>
            <div class="dialog-backdrop" on:click=on_backdrop>
                <div
                    class="dialog dialog--location"
                    node_ref=dialog_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h2 class="dialog__title">"Confirme sua localização"</h2>
                    <div class="location-modal__pin" aria-hidden="true">"📍"</div>
                    {body}
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn log_resolution(resolution: &crate::state::location::Resolution, state: RwSignal<LocationModalState>) {
    use crate::state::location::Resolution;

    match resolution {
        Resolution::Detected => {
            let location = state.with_untracked(|s| s.location.clone());
            log::info!("location detected: {location:?}");
        }
        Resolution::Malformed(payload) => log::warn!("invalid location payload: {payload:?}"),
        Resolution::Failed(e) => log::error!("location detection failed: {e}"),
    }
}
