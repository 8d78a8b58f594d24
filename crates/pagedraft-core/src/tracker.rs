//! Dirty tracking for the text field.
//!
//! The tracker sees every raw input event. Focus changes and other events that
//! leave the value untouched still fire `input` in some browsers, so each
//! observation is compared to the last one and dropped when equal.

use crate::status::StatusView;

/// Whether the text differs from its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyState {
    #[default]
    Clean,
    Dirty,
}

/// Tracks the text field against the text it had when editing began.
#[derive(Debug, Clone)]
pub struct DirtyTracker {
    original_text: String,
    last_seen: Option<String>,
}

impl DirtyTracker {
    pub fn new(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            last_seen: None,
        }
    }

    /// Start from a field that may already differ from the baseline, as it
    /// does when a preview sends the edited text back.
    pub fn with_loaded_text(original_text: impl Into<String>, loaded: &str) -> Self {
        let mut tracker = Self::new(original_text);
        if loaded != tracker.original_text {
            tracker.last_seen = Some(loaded.to_owned());
        }
        tracker
    }

    /// Baseline captured at initialization. Never changes.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Most recent value seen by [`observe`](Self::observe), if any.
    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Record a new field value.
    ///
    /// Returns the status to render, or `None` if the value is the same as
    /// the previous observation.
    pub fn observe(&mut self, text: &str) -> Option<StatusView> {
        if self.last_seen.as_deref() == Some(text) {
            return None;
        }
        self.last_seen = Some(text.to_owned());
        let view = StatusView::for_text(text, &self.original_text);
        tracing::trace!(
            modified = view.modified,
            chars = view.char_count,
            "text changed"
        );
        Some(view)
    }

    /// Dirty only once an observed value differs from the baseline.
    pub fn is_dirty(&self) -> bool {
        self.last_seen
            .as_deref()
            .is_some_and(|seen| seen != self.original_text)
    }

    pub fn state(&self) -> DirtyState {
        if self.is_dirty() {
            DirtyState::Dirty
        } else {
            DirtyState::Clean
        }
    }

    /// Status for the text on screen, used for the first render.
    pub fn initial_view(&self) -> StatusView {
        let text = self.last_seen.as_deref().unwrap_or(&self.original_text);
        StatusView::for_text(text, &self.original_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clean() {
        let tracker = DirtyTracker::new("Hello");
        assert_eq!(tracker.state(), DirtyState::Clean);
        assert_eq!(tracker.last_seen(), None);
        assert_eq!(
            tracker.initial_view(),
            StatusView {
                modified: false,
                char_count: 5
            }
        );
    }

    #[test]
    fn test_loaded_text_differing_from_baseline() {
        let mut tracker = DirtyTracker::with_loaded_text("before", "after!!");
        assert_eq!(tracker.state(), DirtyState::Dirty);
        assert_eq!(
            tracker.initial_view(),
            StatusView {
                modified: true,
                char_count: 7
            }
        );
        // Already rendered, so the same value again is a no-op.
        assert_eq!(tracker.observe("after!!"), None);
        assert!(tracker.observe("before").is_some());
        assert_eq!(tracker.state(), DirtyState::Clean);
    }

    #[test]
    fn test_loaded_text_matching_baseline_starts_clean() {
        let tracker = DirtyTracker::with_loaded_text("same", "same");
        assert_eq!(tracker.last_seen(), None);
        assert!(!tracker.initial_view().modified);
    }

    #[test]
    fn test_change_marks_dirty() {
        let mut tracker = DirtyTracker::new("Hello");
        let view = tracker.observe("Hello world").unwrap();

        assert!(view.modified);
        assert_eq!(view.char_count, 11);
        assert_eq!(tracker.state(), DirtyState::Dirty);
    }

    #[test]
    fn test_repeated_value_is_ignored() {
        let mut tracker = DirtyTracker::new("Hello");
        assert!(tracker.observe("Hello!").is_some());
        assert!(tracker.observe("Hello!").is_none());
        assert!(tracker.observe("Hello!").is_none());
        assert_eq!(tracker.last_seen(), Some("Hello!"));
    }

    #[test]
    fn test_first_observation_of_original_renders() {
        // The first event always renders, even when it matches the baseline.
        let mut tracker = DirtyTracker::new("Hello");
        let view = tracker.observe("Hello").unwrap();
        assert!(!view.modified);
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn test_reverting_clears_dirty() {
        let mut tracker = DirtyTracker::new("Hello");
        tracker.observe("Hell");
        assert!(tracker.is_dirty());
        tracker.observe("Hello");
        assert!(!tracker.is_dirty());
        assert_eq!(tracker.original_text(), "Hello");
    }

    #[test]
    fn test_emptied_field_is_dirty() {
        let mut tracker = DirtyTracker::new("Hello");
        tracker.observe("");
        assert_eq!(tracker.state(), DirtyState::Dirty);
    }
}
