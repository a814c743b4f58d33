//! Shared types for the mention-completion editor
//!
//! These types are used by both:
//! - the Dioxus editor UI (WASM)
//! - the JS editor glue, through the generated TypeScript bindings
//!
//! Everything here is target independent so it can be unit tested natively.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod prompt;
pub mod sampling;

pub use prompt::{
    extract_prefix, is_allowed_search_term, normalize_prompt_text, MENTION_ALLOWED_CHARS,
};
pub use sampling::{ConfigError, SamplingConfig, SamplingField, SliderSpec};

// ============================================================================
// Suggest API
// ============================================================================

/// Path of the completion endpoint, relative to the API base
pub const SUGGEST_PATH: &str = "/api/suggest";

/// Body of `POST /api/suggest`
///
/// `lengthPrefix` is not part of the wire format: it only decides how much
/// of the document ends up in `prefix`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../editor-ui/assets/types/generated.ts")]
pub struct SuggestRequest {
    pub prefix: String,
    pub nsamples: u32,
    pub length: u32,
    pub temperature: f64,
    pub topk: u32,
    pub topp: f64,
}

impl SuggestRequest {
    pub fn new(prefix: impl Into<String>, config: &SamplingConfig) -> Self {
        Self {
            prefix: prefix.into(),
            nsamples: config.n_samples,
            length: config.length,
            temperature: config.temperature,
            topk: config.top_k,
            topp: config.top_p,
        }
    }

    /// Build the request for the given raw document text.
    pub fn from_document_text(text: &str, config: &SamplingConfig) -> Self {
        let normalized = normalize_prompt_text(text);
        let prefix = extract_prefix(&normalized, config.length_prefix as usize);
        Self::new(prefix, config)
    }
}

/// Number of top-level candidates in a suggest response.
///
/// The payload is opaque to the UI; this is only used for logging.
pub fn candidate_count(payload: &serde_json::Value) -> usize {
    match payload {
        serde_json::Value::Array(items) => items.len(),
        serde_json::Value::Null => 0,
        _ => 1,
    }
}

// ============================================================================
// Tests
// ============================================================================
