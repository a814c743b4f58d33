use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;

use crate::bridge::Notifier;

/// Append a `<script>` tag once; later calls with the same id are no-ops.
pub fn ensure_script(id: &str, src: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    script.set_id(id);
    script.set_src(src);
    script.set_async(false);

    if let Some(head) = document.head() {
        head.append_child(&script)?;
    } else if let Some(body) = document.body() {
        body.append_child(&script)?;
    }

    Ok(())
}

/// Poll for a global function installed by a loaded script (3s max).
pub async fn wait_for_global(name: &str) -> bool {
    for _ in 0..30 {
        if has_global(name) {
            return true;
        }
        TimeoutFuture::new(100).await;
    }
    false
}

fn has_global(name: &str) -> bool {
    let global = js_sys::global();
    js_sys::Reflect::has(&global, &JsValue::from_str(name)).unwrap_or(false)
}

/// `window.alert`, which blocks until dismissed
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
