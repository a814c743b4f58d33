//! Rich-text editor surface
//!
//! Quill and quill-mention run in JS; `assets/mention-editor.js` exposes a
//! handle-based API on `window` that this module drives through
//! `wasm_bindgen` externs.

mod options;

pub use options::{EditorOptions, MentionOptions, EDITOR_FORMATS, MENTION_BLOT};

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, warn};
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::api::HttpCompletionClient;
use crate::bridge::{DocumentSurface, MentionBridge, SuggestionRenderer};
use crate::config::{EDITOR_SCRIPT_ID, EDITOR_SCRIPT_SRC};
use crate::interop::{ensure_script, wait_for_global, BrowserAlert};
use crate::state::AppState;

#[wasm_bindgen(js_namespace = window)]
extern "C" {
    #[wasm_bindgen(js_name = createMentionEditor)]
    fn create_mention_editor(container: web_sys::Element, options: &JsValue) -> u32;

    #[wasm_bindgen(js_name = onMentionEditorChange)]
    fn on_mention_editor_change(handle: u32, cb: &Closure<dyn FnMut(String)>);

    #[wasm_bindgen(js_name = onMentionQuery)]
    fn on_mention_query(handle: u32, cb: &Closure<dyn FnMut(String)>);

    #[wasm_bindgen(js_name = onMentionSelect)]
    fn on_mention_select(handle: u32, cb: &Closure<dyn FnMut(String)>);

    #[wasm_bindgen(js_name = getMentionEditorText)]
    fn get_mention_editor_text(handle: u32) -> String;

    #[wasm_bindgen(js_name = setMentionEditorContent)]
    fn set_mention_editor_content(handle: u32, html: &str);

    #[wasm_bindgen(js_name = renderMentionSuggestions)]
    fn render_mention_suggestions(handle: u32, suggestions: &str, search_term: &str);

    #[wasm_bindgen(js_name = insertMention)]
    fn insert_mention(handle: u32, item: &str);

    #[wasm_bindgen(js_name = disposeMentionEditor)]
    fn dispose_mention_editor(handle: u32);
}

/// A mounted Quill instance, addressed by its glue handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuillSurface {
    handle: u32,
}

impl DocumentSurface for QuillSurface {
    fn text(&self) -> String {
        get_mention_editor_text(self.handle)
    }

    fn insert_mention(&self, item: &Value) {
        insert_mention(self.handle, &item.to_string());
    }
}

impl SuggestionRenderer for QuillSurface {
    fn render_suggestions(&self, suggestions: Value, search_term: &str) {
        render_mention_suggestions(self.handle, &suggestions.to_string(), search_term);
    }
}

type EditorBridge = MentionBridge<HttpCompletionClient, QuillSurface, QuillSurface, BrowserAlert>;

struct MentionEditorRuntime {
    handle: u32,
    _on_change: Closure<dyn FnMut(String)>,
    _on_query: Closure<dyn FnMut(String)>,
    _on_select: Closure<dyn FnMut(String)>,
}

impl Drop for MentionEditorRuntime {
    fn drop(&mut self) {
        dispose_mention_editor(self.handle);
    }
}

/// Quill editor with `@` completions.
///
/// Sampling parameters are read from `state` when a mention fires; the
/// editor HTML is pushed back whenever `state.content` changes (the glue
/// ignores content it already shows).
#[component]
pub fn MentionEditor(state: Signal<AppState>, on_change: Callback<String>) -> Element {
    let container_id = use_signal(|| format!("mention-editor-{}", uuid::Uuid::new_v4()));
    let mut runtime = use_signal(|| None::<MentionEditorRuntime>);
    let cid = container_id();

    use_effect(move || {
        if runtime.peek().is_some() {
            return;
        }

        let container_id = container_id.peek().clone();
        spawn(async move {
            if let Err(e) = ensure_script(EDITOR_SCRIPT_ID, EDITOR_SCRIPT_SRC) {
                error!("failed to load mention editor script: {:?}", e);
                return;
            }
            if !wait_for_global("createMentionEditor").await {
                error!("mention editor bridge is unavailable");
                return;
            }

            let Some(container) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&container_id))
            else {
                return;
            };

            let options = match serde_json::to_string(&EditorOptions::default()) {
                Ok(options) => options,
                Err(e) => {
                    error!("failed to serialize editor options: {}", e);
                    return;
                }
            };
            let handle = create_mention_editor(container, &JsValue::from_str(&options));
            if handle == 0 {
                error!("failed to create mention editor handle");
                return;
            }
            set_mention_editor_content(handle, &state.peek().content);

            let surface = QuillSurface { handle };
            let bridge: Rc<EditorBridge> = Rc::new(MentionBridge::new(
                HttpCompletionClient::default(),
                surface,
                surface,
                BrowserAlert,
            ));

            let on_change_cb = Closure::wrap(Box::new(move |html: String| {
                on_change.call(html);
            }) as Box<dyn FnMut(String)>);
            on_mention_editor_change(handle, &on_change_cb);

            let query_bridge = bridge.clone();
            let on_query_cb = Closure::wrap(Box::new(move |search_term: String| {
                let bridge = query_bridge.clone();
                let sampling = state.peek().sampling.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    bridge.fetch_suggestions(&search_term, &sampling).await;
                });
            }) as Box<dyn FnMut(String)>);
            on_mention_query(handle, &on_query_cb);

            let select_bridge = bridge;
            let on_select_cb = Closure::wrap(Box::new(move |item: String| {
                match serde_json::from_str::<Value>(&item) {
                    Ok(item) => select_bridge.select(&item),
                    Err(e) => warn!("unreadable mention selection: {}", e),
                }
            }) as Box<dyn FnMut(String)>);
            on_mention_select(handle, &on_select_cb);

            runtime.set(Some(MentionEditorRuntime {
                handle,
                _on_change: on_change_cb,
                _on_query: on_query_cb,
                _on_select: on_select_cb,
            }));
        });
    });

    use_effect(move || {
        let content = state.read().content.clone();
        if let Some(rt) = runtime.read().as_ref() {
            set_mention_editor_content(rt.handle, &content);
        }
    });

    rsx! {
        div {
            id: "{cid}",
            class: "mention-editor-host",
        }
    }
}
