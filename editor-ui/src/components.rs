use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use shared_types::{SamplingConfig, SamplingField, SliderSpec};

use crate::config::PAGE_HEADING;
use crate::editor::MentionEditor;
use crate::state::{AppAction, AppState, SidebarState};
use crate::storage::LocalDraftStore;

const EDITOR_STYLES: &str = r#"
.sidebar { background: #f3f4f6; border-right: 1px solid #e5e7eb; display: flex; flex-direction: column; justify-content: space-between; overflow: hidden; }
.sidebar__content { display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; }
.sidebar__control { padding: 0.5rem; }
.sidebar__control button { white-space: nowrap; }
.slider { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.875rem; }
.slider__value { font-variant-numeric: tabular-nums; color: #374151; }
.btn { padding: 0.4rem 0.75rem; border: 1px solid #d1d5db; border-radius: 6px; background: white; cursor: pointer; }
.container { padding: 1rem 2rem; overflow: auto; }
.mention-editor-host { min-height: 60vh; }
.custom-mention { background: #e0f2fe; border-radius: 4px; }
"#;

/// Root composition: sidebar, sampling panel and the editor
#[component]
pub fn App() -> Element {
    let store = LocalDraftStore::default();
    let mut state = use_signal(|| AppState::restore(&store));

    let dispatch = use_callback(move |action: AppAction| {
        if let Err(e) = state.write().apply(action, &store) {
            warn!("Ignoring sampling update: {}", e);
        }
    });
    let on_editor_change =
        use_callback(move |html: String| dispatch.call(AppAction::ContentChanged(html)));

    let sidebar = state.read().sidebar;
    let sampling = state.read().sampling.clone();
    let columns = sidebar.sidebar_column();

    rsx! {
        style { {EDITOR_STYLES} }
        div {
            style: "display: grid; height: 100vh; grid-template-columns: {columns} 1fr;",
            Sidebar { sidebar, sampling, on_action: dispatch }
            main {
                class: "container",
                h1 { "{PAGE_HEADING}" }
                section {
                    MentionEditor { state, on_change: on_editor_change }
                }
            }
        }
    }
}

#[component]
pub fn Sidebar(
    sidebar: SidebarState,
    sampling: SamplingConfig,
    on_action: Callback<AppAction>,
) -> Element {
    let toggle_label = sidebar.toggle_label();

    rsx! {
        aside {
            class: "sidebar",
            div {
                class: "sidebar__content",
                style: if sidebar.is_collapsed() { "display: none;" } else { "" },
                SamplingPanel { sampling, on_action }
                button {
                    class: "btn",
                    onclick: move |_| on_action.call(AppAction::ClearEditor),
                    "Clear editor"
                }
            }
            div {
                class: "sidebar__control",
                button {
                    onclick: move |_| on_action.call(AppAction::ToggleSidebar),
                    "{toggle_label}"
                }
            }
        }
    }
}

#[component]
pub fn SamplingPanel(sampling: SamplingConfig, on_action: Callback<AppAction>) -> Element {
    let sliders: Vec<(&'static str, SliderSpec, f64)> = SamplingField::ALL
        .into_iter()
        .map(|field| (field.name(), field.slider(), sampling.get(field)))
        .collect();

    rsx! {
        h3 { style: "margin: 0;", "Configuration" }
        for (name, spec, value) in sliders {
            SamplingSlider {
                key: "{name}",
                spec,
                value,
                on_action,
            }
        }
    }
}

/// Range input bound to one sampling field by name
#[component]
pub fn SamplingSlider(spec: SliderSpec, value: f64, on_action: Callback<AppAction>) -> Element {
    let name = spec.field.name();

    rsx! {
        label {
            class: "slider",
            span { "{spec.label}" }
            input {
                r#type: "range",
                name: "{name}",
                min: "{spec.min}",
                max: "{spec.max}",
                step: "{spec.step}",
                value: "{value}",
                oninput: move |e| {
                    on_action.call(AppAction::UpdateSampling {
                        name: name.to_string(),
                        value: e.value(),
                    })
                }
            }
            span { class: "slider__value", "{value}" }
        }
    }
}
