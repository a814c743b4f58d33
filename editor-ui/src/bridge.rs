//! Mention-suggestion bridge
//!
//! Sits between the editor surface and the completion endpoint. When the user
//! types `@`, the surface hands the bridge the search term; the bridge turns
//! the document into a prompt, requests completions with the current
//! sampling parameters and passes the response back to the mention dropdown.
//!
//! The editor, the dropdown, the HTTP client and the alert are capability
//! traits so the bridge can be driven by in-memory fakes in tests.

use async_trait::async_trait;
use dioxus_logger::tracing::{debug, error, info};
use serde_json::Value;
use shared_types::{candidate_count, is_allowed_search_term, SamplingConfig, SuggestRequest};

use crate::api::SuggestError;

/// Issues completion requests
#[async_trait(?Send)]
pub trait CompletionClient {
    async fn suggest(&self, request: &SuggestRequest) -> Result<Value, SuggestError>;
}

/// The editable document
pub trait DocumentSurface {
    /// Plain text of the whole document
    fn text(&self) -> String;

    /// Insert a selected candidate at the mention position
    fn insert_mention(&self, item: &Value);
}

/// The mention dropdown
pub trait SuggestionRenderer {
    fn render_suggestions(&self, suggestions: Value, search_term: &str);
}

/// Blocking user notification
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// What happened to one mention trigger
#[derive(Debug, Clone, PartialEq)]
pub enum MentionOutcome {
    Rendered { candidates: usize },
    /// Search term outside the mention alphabet; nothing was requested
    Ignored,
    Failed(SuggestError),
}

pub struct MentionBridge<C, S, R, N> {
    client: C,
    surface: S,
    renderer: R,
    notifier: N,
}

impl<C, S, R, N> MentionBridge<C, S, R, N>
where
    C: CompletionClient,
    S: DocumentSurface,
    R: SuggestionRenderer,
    N: Notifier,
{
    pub fn new(client: C, surface: S, renderer: R, notifier: N) -> Self {
        Self {
            client,
            surface,
            renderer,
            notifier,
        }
    }

    /// Handle one `@` trigger.
    ///
    /// `config` is a snapshot taken when the trigger fired. One attempt only;
    /// a failure is logged and alerted and nothing is rendered.
    pub async fn fetch_suggestions(
        &self,
        search_term: &str,
        config: &SamplingConfig,
    ) -> MentionOutcome {
        if !is_allowed_search_term(search_term) {
            debug!("Ignoring mention search term {:?}", search_term);
            return MentionOutcome::Ignored;
        }

        let request = SuggestRequest::from_document_text(&self.surface.text(), config);
        debug!(
            "Requesting {} suggestions for a {}-char prefix",
            request.nsamples,
            request.prefix.chars().count()
        );

        match self.client.suggest(&request).await {
            Ok(suggestions) => {
                let candidates = candidate_count(&suggestions);
                debug!("Received {} suggestions", candidates);
                self.renderer.render_suggestions(suggestions, search_term);
                MentionOutcome::Rendered { candidates }
            }
            Err(e) => {
                error!("Suggestion request failed: {}", e);
                self.notifier.alert(&e.to_string());
                MentionOutcome::Failed(e)
            }
        }
    }

    /// Insert the candidate the user picked from the dropdown.
    pub fn select(&self, item: &Value) {
        info!("Inserting selected suggestion");
        self.surface.insert_mention(item);
    }
}
