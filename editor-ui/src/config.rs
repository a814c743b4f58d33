//! UI configuration: API location, storage key and fixed UI strings

use shared_types::SUGGEST_PATH;
use std::sync::OnceLock;

/// Local storage key holding the last editor HTML
pub const STORAGE_KEY: &str = "editorContent";

/// Shown by the mention dropdown while a completion request is outstanding
pub const LOADING_LABEL: &str = "טוען...";

pub const EDITOR_PLACEHOLDER: &str = "כתבו פה משהו והשתמשו בסימן @ על מנת לייצר השלמות";

pub const PAGE_HEADING: &str = "GPT-2 editor";

/// JS glue that wraps Quill and quill-mention, served from `assets/`
pub const EDITOR_SCRIPT_ID: &str = "mention-editor-bridge-js";
pub const EDITOR_SCRIPT_SRC: &str = "/mention-editor.js";

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    api_base_for_host(&hostname)
}

fn api_base_for_host(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        String::new()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

pub fn suggest_url() -> String {
    suggest_url_for(api_base())
}

fn suggest_url_for(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), SUGGEST_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_targets_dev_api_server() {
        assert_eq!(api_base_for_host("localhost"), "http://localhost:8080");
        assert_eq!(api_base_for_host("127.0.0.1"), "http://localhost:8080");
    }

    #[test]
    fn other_hosts_use_same_origin() {
        assert_eq!(api_base_for_host("editor.example.org"), "");
        assert_eq!(api_base_for_host(""), "");
    }

    #[test]
    fn suggest_url_joins_base_and_path() {
        assert_eq!(suggest_url_for(""), "/api/suggest");
        assert_eq!(
            suggest_url_for("http://localhost:8080/"),
            "http://localhost:8080/api/suggest"
        );
    }
}
