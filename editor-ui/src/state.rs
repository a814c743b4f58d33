use dioxus_logger::tracing::debug;
use shared_types::{ConfigError, SamplingConfig};

use crate::storage::DraftStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Collapsed,
    Expanded,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Collapsed => SidebarState::Expanded,
            SidebarState::Expanded => SidebarState::Collapsed,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == SidebarState::Collapsed
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            SidebarState::Collapsed => "Open Sidebar",
            SidebarState::Expanded => "Close Sidebar",
        }
    }

    /// First column of the page grid
    pub fn sidebar_column(self) -> &'static str {
        match self {
            SidebarState::Collapsed => "0",
            SidebarState::Expanded => "minmax(150px, 10%)",
        }
    }
}

/// Top-level UI state owned by the root component
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub sidebar: SidebarState,
    /// Editor HTML
    pub content: String,
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    ToggleSidebar,
    /// The editor reported new HTML
    ContentChanged(String),
    ClearEditor,
    /// A slider moved: `name` selects the sampling field, `value` is raw input
    UpdateSampling { name: String, value: String },
}

impl AppState {
    /// Initial state: draft from the store, collapsed sidebar, default sampling.
    pub fn restore(store: &dyn DraftStore) -> Self {
        Self {
            content: store.load().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Apply one UI action.
    ///
    /// Only `ContentChanged` writes the store. `ClearEditor` empties the
    /// content here and relies on the editor echoing the change back.
    pub fn apply(&mut self, action: AppAction, store: &dyn DraftStore) -> Result<(), ConfigError> {
        match action {
            AppAction::ToggleSidebar => {
                self.sidebar = self.sidebar.toggled();
            }
            AppAction::ContentChanged(content) => {
                store.save(&content);
                self.content = content;
            }
            AppAction::ClearEditor => {
                self.content.clear();
            }
            AppAction::UpdateSampling { name, value } => {
                let field = self.sampling.update(&name, &value)?;
                debug!("{} = {}", field.name(), self.sampling.get(field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryDraftStore;

    #[test]
    fn restore_reads_draft_once() {
        let store = MemoryDraftStore::with_content("<p>draft</p>");
        let state = AppState::restore(&store);

        assert_eq!(state.content, "<p>draft</p>");
        assert_eq!(state.sidebar, SidebarState::Collapsed);
        assert_eq!(state.sampling, SamplingConfig::default());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn restore_without_draft_starts_empty() {
        let state = AppState::restore(&MemoryDraftStore::default());
        assert_eq!(state.content, "");
    }

    #[test]
    fn toggling_twice_restores_visibility() {
        let store = MemoryDraftStore::default();
        let mut state = AppState::restore(&store);
        let before = state.sidebar;

        state.apply(AppAction::ToggleSidebar, &store).unwrap();
        assert_eq!(state.sidebar, SidebarState::Expanded);
        assert_eq!(state.sidebar.toggle_label(), "Close Sidebar");
        state.apply(AppAction::ToggleSidebar, &store).unwrap();

        assert_eq!(state.sidebar, before);
        assert_eq!(state.sidebar.toggle_label(), "Open Sidebar");
    }

    #[test]
    fn content_changes_write_through() {
        let store = MemoryDraftStore::default();
        let mut state = AppState::restore(&store);

        state
            .apply(AppAction::ContentChanged("<p>a</p>".into()), &store)
            .unwrap();
        state
            .apply(AppAction::ContentChanged("<p>ab</p>".into()), &store)
            .unwrap();

        assert_eq!(state.content, "<p>ab</p>");
        assert_eq!(store.load().as_deref(), Some("<p>ab</p>"));
        assert_eq!(store.saves(), 2);
    }

    #[test]
    fn clear_does_not_touch_storage_directly() {
        let store = MemoryDraftStore::with_content("<p>draft</p>");
        let mut state = AppState::restore(&store);

        state.apply(AppAction::ClearEditor, &store).unwrap();

        assert_eq!(state.content, "");
        assert_eq!(store.load().as_deref(), Some("<p>draft</p>"));
        assert_eq!(store.saves(), 0);

        // The editor echoes the cleared document back as a change.
        state
            .apply(AppAction::ContentChanged("<p><br></p>".into()), &store)
            .unwrap();
        assert_eq!(store.load().as_deref(), Some("<p><br></p>"));
    }

    #[test]
    fn sampling_updates_go_through_named_reducer() {
        let store = MemoryDraftStore::default();
        let mut state = AppState::restore(&store);

        state
            .apply(
                AppAction::UpdateSampling {
                    name: "topk".into(),
                    value: "500".into(),
                },
                &store,
            )
            .unwrap();
        assert_eq!(state.sampling.top_k, 100);

        let err = state
            .apply(
                AppAction::UpdateSampling {
                    name: "bogus".into(),
                    value: "1".into(),
                },
                &store,
            )
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownField("bogus".into()));
        assert!(state.sampling.is_within_bounds());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn sidebar_layout_columns() {
        assert_eq!(SidebarState::Collapsed.sidebar_column(), "0");
        assert_eq!(
            SidebarState::Expanded.sidebar_column(),
            "minmax(150px, 10%)"
        );
        assert!(SidebarState::default().is_collapsed());
    }
}
