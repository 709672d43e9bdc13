//! View state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four display strategies, without their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    List,
    Sort,
    Search,
    Filter,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::List => "list",
            ViewMode::Sort => "sort",
            ViewMode::Search => "search",
            ViewMode::Filter => "filter",
        };
        f.write_str(name)
    }
}

/// The active view together with the text it filters by.
///
/// Search text and department-filter text live inside their variants, so at
/// most one of them can be set at a time and neither can linger behind the
/// list or sorted views.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewState {
    /// Stored order, unfiltered.
    #[default]
    List,
    /// Ordered by name.
    Sort,
    /// Name contains the text, case-insensitively.
    Search(String),
    /// Department contains the text, case-insensitively.
    Filter(String),
}

/// A user action that moves the view state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewAction {
    /// The "List" button.
    ShowList,
    /// The "Sort" button.
    ShowSort,
    /// New contents of the name search box.
    SearchInput(String),
    /// New contents of the department filter box.
    FilterInput(String),
}

impl ViewState {
    /// Search view for `text`, or the list view when `text` is empty.
    pub fn search(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            ViewState::List
        } else {
            ViewState::Search(text)
        }
    }

    /// Department filter view for `text`, or the list view when `text` is empty.
    pub fn filter(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            ViewState::List
        } else {
            ViewState::Filter(text)
        }
    }

    /// Returns the state reached by applying `action`.
    ///
    /// Buttons switch unconditionally and clear both text boxes. Typing into
    /// one box replaces whatever the other box held.
    pub fn apply(self, action: ViewAction) -> ViewState {
        match action {
            ViewAction::ShowList => ViewState::List,
            ViewAction::ShowSort => ViewState::Sort,
            ViewAction::SearchInput(text) => ViewState::search(text),
            ViewAction::FilterInput(text) => ViewState::filter(text),
        }
    }

    /// The view that will actually be rendered.
    ///
    /// A search or filter variant holding empty text renders as the list.
    pub fn mode(&self) -> ViewMode {
        match self {
            ViewState::List => ViewMode::List,
            ViewState::Sort => ViewMode::Sort,
            ViewState::Search(text) if !text.is_empty() => ViewMode::Search,
            ViewState::Filter(text) if !text.is_empty() => ViewMode::Filter,
            ViewState::Search(_) | ViewState::Filter(_) => ViewMode::List,
        }
    }

    /// Contents of the search box.
    pub fn search_text(&self) -> &str {
        match self {
            ViewState::Search(text) => text,
            _ => "",
        }
    }

    /// Contents of the department filter box.
    pub fn filter_text(&self) -> &str {
        match self {
            ViewState::Filter(text) => text,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_list() {
        assert_eq!(ViewState::default(), ViewState::List);
        assert_eq!(ViewState::default().mode(), ViewMode::List);
    }

    #[test]
    fn test_buttons_clear_text() {
        let state = ViewState::search("sa").apply(ViewAction::ShowSort);
        assert_eq!(state, ViewState::Sort);
        assert_eq!(state.search_text(), "");
        assert_eq!(state.filter_text(), "");

        let state = ViewState::filter("hr").apply(ViewAction::ShowList);
        assert_eq!(state, ViewState::List);
    }

    #[test]
    fn test_typing_search_clears_filter() {
        let state = ViewState::filter("hr").apply(ViewAction::SearchInput("sa".into()));
        assert_eq!(state, ViewState::Search("sa".into()));
        assert_eq!(state.filter_text(), "");
        assert_eq!(state.search_text(), "sa");
    }

    #[test]
    fn test_typing_filter_clears_search() {
        let state = ViewState::search("sa").apply(ViewAction::FilterInput("it".into()));
        assert_eq!(state, ViewState::Filter("it".into()));
        assert_eq!(state.search_text(), "");
    }

    #[test]
    fn test_empty_text_falls_back_to_list() {
        let state = ViewState::Sort.apply(ViewAction::SearchInput(String::new()));
        assert_eq!(state, ViewState::List);

        let state = ViewState::Sort.apply(ViewAction::FilterInput(String::new()));
        assert_eq!(state, ViewState::List);
    }

    #[test]
    fn test_hand_built_empty_variant_renders_as_list() {
        assert_eq!(ViewState::Search(String::new()).mode(), ViewMode::List);
        assert_eq!(ViewState::Filter(String::new()).mode(), ViewMode::List);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&ViewState::Search("sa".into())).unwrap();
        assert_eq!(json, r#"{"type":"Search","data":"sa"}"#);
        assert_eq!(serde_json::to_string(&ViewMode::Filter).unwrap(), r#""filter""#);
    }
}
