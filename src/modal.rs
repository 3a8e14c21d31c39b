use std::rc::Rc;
use yew::prelude::*;

use crate::description::GENERATION_FAILED_MESSAGE;

/// What the description modal is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalView {
    #[default]
    Hidden,
    /// Visible, waiting for the generator; spinner shown
    Loading,
    /// Visible with generated text
    Showing(String),
    /// Visible with the fixed failure message
    Failed,
}

/// Display state of the description modal.
///
/// `session` counts closes. A request remembers the session it was started
/// in and its result is dropped once the modal has been closed since.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    view: ModalView,
    session: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    /// A generate button was clicked
    Open,
    Completed { session: u64, text: String },
    GenerationFailed { session: u64 },
    /// Close button, backdrop click or Escape
    Close,
}

impl ModalState {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self::with_view(ModalView::Loading)
    }

    pub fn showing(text: impl Into<String>) -> Self {
        Self::with_view(ModalView::Showing(text.into()))
    }

    pub fn failed() -> Self {
        Self::with_view(ModalView::Failed)
    }

    fn with_view(view: ModalView) -> Self {
        Self { view, session: 0 }
    }

    pub fn view(&self) -> &ModalView {
        &self.view
    }

    /// Session a request started now belongs to
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.view, ModalView::Hidden)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ModalView::Loading)
    }

    /// Text for the description area, if any
    pub fn body(&self) -> Option<&str> {
        match &self.view {
            ModalView::Showing(text) => Some(text),
            ModalView::Failed => Some(GENERATION_FAILED_MESSAGE),
            _ => None,
        }
    }

    /// Overlapping requests within one open session are not guarded:
    /// whichever completion arrives last is shown. Completions from an
    /// earlier session, or arriving while hidden, are dropped.
    pub fn apply(&self, action: ModalAction) -> ModalState {
        let session = self.session;
        match action {
            ModalAction::Open => Self {
                view: ModalView::Loading,
                session,
            },
            ModalAction::Close => Self {
                view: ModalView::Hidden,
                session: session + 1,
            },
            ModalAction::Completed { session: started, text } if self.accepts(started) => Self {
                view: ModalView::Showing(text),
                session,
            },
            ModalAction::GenerationFailed { session: started } if self.accepts(started) => Self {
                view: ModalView::Failed,
                session,
            },
            ModalAction::Completed { .. } | ModalAction::GenerationFailed { .. } => self.clone(),
        }
    }

    fn accepts(&self, started: u64) -> bool {
        self.is_visible() && started == self.session
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(session: u64, text: &str) -> ModalAction {
        ModalAction::Completed {
            session,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_starts_hidden() {
        let state = ModalState::default();
        assert!(!state.is_visible());
        assert!(!state.is_loading());
        assert_eq!(state.body(), None);
        assert_eq!(state.session(), 0);
    }

    #[test]
    fn test_open_shows_spinner_without_text() {
        let state = ModalState::hidden().apply(ModalAction::Open);
        assert!(state.is_visible());
        assert!(state.is_loading());
        assert_eq!(state.body(), None);
    }

    #[test]
    fn test_completion_replaces_spinner() {
        let state = ModalState::hidden().apply(ModalAction::Open);
        let state = state.apply(completed(state.session(), "A lovely home."));
        assert!(state.is_visible());
        assert!(!state.is_loading());
        assert_eq!(state.body(), Some("A lovely home."));
    }

    #[test]
    fn test_failure_shows_fixed_message() {
        let state = ModalState::loading().apply(ModalAction::GenerationFailed { session: 0 });
        assert!(!state.is_loading());
        assert_eq!(state.body(), Some(GENERATION_FAILED_MESSAGE));
    }

    #[test]
    fn test_close_hides_and_discards_text() {
        let state = ModalState::showing("text").apply(ModalAction::Close);
        assert_eq!(*state.view(), ModalView::Hidden);
        assert_eq!(state.body(), None);
        assert_eq!(state.session(), 1);
    }

    #[test]
    fn test_close_while_loading_drops_late_completion() {
        let state = ModalState::loading()
            .apply(ModalAction::Close)
            .apply(completed(0, "late"));
        assert_eq!(*state.view(), ModalView::Hidden);

        let state = state.apply(ModalAction::GenerationFailed { session: 0 });
        assert_eq!(*state.view(), ModalView::Hidden);
    }

    #[test]
    fn test_result_from_before_close_is_dropped_after_reopen() {
        let opened_for_a = ModalState::hidden().apply(ModalAction::Open);
        let session_a = opened_for_a.session();

        let opened_for_b = opened_for_a.apply(ModalAction::Close).apply(ModalAction::Open);
        let session_b = opened_for_b.session();
        assert_ne!(session_a, session_b);

        let state = opened_for_b.apply(completed(session_a, "description of A"));
        assert!(state.is_loading());
        assert_eq!(state.body(), None);

        let state = state.apply(ModalAction::GenerationFailed { session: session_a });
        assert!(state.is_loading());

        let state = state.apply(completed(session_b, "description of B"));
        assert_eq!(state.body(), Some("description of B"));
    }

    #[test]
    fn test_reopen_clears_previous_text() {
        let state = ModalState::showing("old").apply(ModalAction::Open);
        assert!(state.is_loading());
        assert_eq!(state.body(), None);
    }

    #[test]
    fn test_overlapping_requests_last_completion_wins() {
        let state = ModalState::hidden()
            .apply(ModalAction::Open)
            .apply(ModalAction::Open)
            .apply(completed(0, "first"))
            .apply(completed(0, "second"));
        assert_eq!(state.body(), Some("second"));
    }

    #[test]
    fn test_reduce_keeps_rc_when_unchanged() {
        let state = Rc::new(ModalState::hidden());
        let next = state.clone().reduce(completed(0, "ignored"));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.reduce(ModalAction::Open);
        assert!(next.is_loading());
    }
}
