use dioxus::prelude::*;

use crate::{
    domain::{
        AppState, IpLocateError, IpLocator, RadiusUnit, SearchOutcome, SearchRequest,
        RADIUS_PRESETS,
    },
    infra::{
        geocode::{IpinfoClient, NominatimClient},
        places::{api_key_from_env, PlacesClient},
    },
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::browser,
};

#[component]
pub fn LocatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut location_input = use_signal(String::new);
    let mut radius_input = use_signal(String::new);
    let mut preset_selection = use_signal(|| RADIUS_PRESETS[2].to_string());
    let mut unit_selection = use_signal(RadiusUnit::default);

    let results = state.with(|st| st.locator.results().to_vec());

    let on_autolocate = {
        let toasts = toasts.clone();
        let location_input = location_input.clone();
        move |_| {
            let toasts = toasts.clone();
            let mut location_input = location_input.clone();
            spawn(async move {
                let client = match IpinfoClient::new() {
                    Ok(client) => client,
                    Err(error) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Failed to autogenerate location: {error}"),
                        );
                        return;
                    }
                };
                match client.locate().await {
                    Ok(Some(address)) => location_input.set(address),
                    Ok(None) => push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Unable to find the user's location. Please enter it manually.",
                    ),
                    Err(IpLocateError::Timeout) => push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Geocoding service timed out. Please try again later.",
                    ),
                    Err(IpLocateError::Unavailable) => push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Geocoding service is currently unavailable. Please try again later.",
                    ),
                    Err(IpLocateError::Other(cause)) => push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Failed to autogenerate location: {cause}"),
                    ),
                }
            });
        }
    };

    let on_search = {
        let state = state.clone();
        let toasts = toasts.clone();
        let location_input = location_input.clone();
        let radius_input = radius_input.clone();
        let preset_selection = preset_selection.clone();
        let unit_selection = unit_selection.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let request =
                match SearchRequest::parse(&location_input(), &radius_input(), unit_selection()) {
                    Ok(request) => request,
                    Err(error) => {
                        push_toast(toasts.clone(), ToastKind::Error, error.to_string());
                        return;
                    }
                };

            let mut state = state.clone();
            let toasts = toasts.clone();
            let mut radius_input = radius_input.clone();
            let mut preset_selection = preset_selection.clone();
            spawn(async move {
                let Ok(geocoder) = NominatimClient::new() else {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Failed to initialise the geocoding client.",
                    );
                    return;
                };
                let Ok(places) = PlacesClient::new(api_key_from_env()) else {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Failed to initialise the places client.",
                    );
                    return;
                };

                // Run the search on a detached session, then publish it back
                // so the signal is never held across an await.
                let mut session = state.with(|st| st.locator.clone());
                let outcome = session.search(&geocoder, &places, &request).await;
                state.with_mut(|st| st.locator = session);

                match outcome {
                    Ok(SearchOutcome::Found(count)) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Info,
                            format!("Found {count} food banks nearby."),
                        );
                    }
                    Ok(SearchOutcome::Fallback {
                        distance_miles,
                        suggested_radius,
                    }) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Info,
                            format!(
                                "No food banks found nearby. The closest food bank is \
                                 approximately {distance_miles} miles away."
                            ),
                        );
                        radius_input.set(suggested_radius.to_string());
                        preset_selection.set(suggested_radius.to_string());
                    }
                    Ok(SearchOutcome::NotFound) => {
                        push_toast(toasts.clone(), ToastKind::Info, "No food banks found nearby.");
                    }
                    Err(error) => {
                        push_toast(toasts.clone(), ToastKind::Error, error.to_string());
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "page",
            form { class: "panel", onsubmit: on_search,
                div { class: "field-row",
                    label { class: "field-label", "Location" }
                    input {
                        class: "text-input",
                        value: location_input(),
                        oninput: move |evt| location_input.set(evt.value().to_string()),
                        placeholder: "Street address, city, or postal code",
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: on_autolocate,
                        "Autogenerate Location"
                    }
                }
                div { class: "field-row",
                    label { class: "field-label", "Radius" }
                    input {
                        class: "text-input text-input-small",
                        inputmode: "decimal",
                        value: radius_input(),
                        oninput: move |evt| radius_input.set(evt.value().to_string()),
                        placeholder: "5",
                    }
                    label { class: "field-label", "Unit" }
                    select {
                        class: "select-input",
                        onchange: move |evt| {
                            if let Some(unit) = RadiusUnit::from_label(&evt.value()) {
                                unit_selection.set(unit);
                            }
                        },
                        for unit in [RadiusUnit::Miles, RadiusUnit::Kilometers] {
                            option {
                                value: unit.label(),
                                selected: unit_selection() == unit,
                                "{unit.label()}"
                            }
                        }
                    }
                }
                div { class: "field-row",
                    label { class: "field-label", "Preset" }
                    select {
                        class: "select-input",
                        onchange: move |evt| {
                            preset_selection.set(evt.value().to_string());
                            radius_input.set(evt.value().to_string());
                        },
                        for preset in RADIUS_PRESETS {
                            option {
                                value: "{preset}",
                                selected: preset_selection() == preset.to_string(),
                                "{preset}"
                            }
                        }
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", "Search Food Banks" }
            }

            section { class: "panel",
                h2 { class: "panel-title", "Food Banks" }
                if results.is_empty() {
                    p { class: "empty-note", "No results yet. Run a search to list food banks." }
                } else {
                    p { class: "hint-note", "Double-click a result to open it on the map." }
                    ul { class: "result-list",
                        for bank in results {
                            li {
                                key: "{bank.name}",
                                class: "result-row",
                                ondoubleclick: {
                                    let name = bank.name.clone();
                                    let state = state.clone();
                                    move |_| {
                                        let link = state
                                            .with(|st| st.locator.link_for(&name).map(str::to_string));
                                        if let Some(link) = link {
                                            browser::open_url(&link);
                                        }
                                    }
                                },
                                span { class: "result-name", "{bank.name}" }
                                span { class: "result-address", "{bank.address}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
