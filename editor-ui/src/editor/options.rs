//! Quill + quill-mention options handed to the JS glue as JSON

use serde::Serialize;
use serde_json::{json, Value};
use shared_types::MENTION_ALLOWED_CHARS;

use crate::config::{EDITOR_PLACEHOLDER, LOADING_LABEL};

pub const MENTION_BLOT: &str = "custom_mention";

/// Formats the editor accepts, including the suggestion blot
pub const EDITOR_FORMATS: [&str; 14] = [
    "header",
    "bold",
    "italic",
    "underline",
    "strike",
    "blockquote",
    "align",
    "list",
    "bullet",
    "indent",
    "direction",
    "link",
    "image",
    MENTION_BLOT,
];

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MentionOptions {
    /// Regex source; the glue compiles it with `new RegExp`
    pub allowed_chars: String,
    pub mention_denotation_chars: Vec<String>,
    pub blot_name: String,
    pub fix_mentions_to_quill: bool,
    pub space_after_insert: bool,
}

impl Default for MentionOptions {
    fn default() -> Self {
        Self {
            allowed_chars: MENTION_ALLOWED_CHARS.to_string(),
            mention_denotation_chars: vec!["@".to_string()],
            blot_name: MENTION_BLOT.to_string(),
            fix_mentions_to_quill: false,
            space_after_insert: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub theme: String,
    pub placeholder: String,
    /// Returned by the mention plugin's `renderLoading` while a request is out
    pub loading_label: String,
    pub toolbar: Value,
    pub formats: Vec<String>,
    pub mention: MentionOptions,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            theme: "snow".to_string(),
            placeholder: EDITOR_PLACEHOLDER.to_string(),
            loading_label: LOADING_LABEL.to_string(),
            toolbar: toolbar(),
            formats: EDITOR_FORMATS.iter().map(|f| f.to_string()).collect(),
            mention: MentionOptions::default(),
        }
    }
}

fn toolbar() -> Value {
    json!([
        [{ "header": [1, 2, false] }],
        ["bold", "italic", "underline", "strike", "blockquote", "align"],
        [
            { "list": "ordered" },
            { "list": "bullet" },
            { "indent": "-1" },
            { "indent": "+1" },
            { "direction": "rtl" }
        ],
        ["link", "image"],
        ["clean"]
    ])
}
