//! One editing session: everything the enhancer knows about a page view.
//!
//! `EditSession` owns the tracker, draft slot and guard, and turns host events
//! into effects. It never touches the DOM or schedules anything itself; the
//! platform layer applies the returned effects (render, start or stop the
//! autosave interval, remove the unload listener).

use crate::config::EnhancerConfig;
use crate::context::EditingContext;
use crate::draft::{DraftStore, KeyValueStore};
use crate::guard::{GuardState, NavigationGuard, SubmitAction};
use crate::slug::{SlugCheck, check_slug};
use crate::status::{FontFamily, StatusView, swap_font_class};
use crate::tracker::{DirtyState, DirtyTracker};

/// Lifecycle of the periodic autosave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutosaveState {
    /// No interval yet; the first real edit starts one.
    #[default]
    Idle,
    Running,
    /// Cancelled after Save. Never restarts.
    Stopped,
}

/// What to render when the enhancer attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialView {
    pub status: StatusView,
    /// Show the restore affordance. Evaluated once, at start.
    pub draft_available: bool,
}

/// Outcome of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEffect {
    /// Same value as last time. Nothing to do.
    Unchanged,
    Changed {
        status: StatusView,
        /// Start the autosave interval now.
        start_autosave: bool,
    },
}

/// Outcome of a Save or Preview click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEffect {
    /// Cancel the running autosave interval.
    pub stop_autosave: bool,
}

#[derive(Debug)]
pub struct EditSession<S> {
    config: EnhancerConfig,
    context: EditingContext,
    tracker: DirtyTracker,
    drafts: DraftStore<S>,
    guard: NavigationGuard,
    autosave: AutosaveState,
    draft_available: bool,
}

impl<S: KeyValueStore> EditSession<S> {
    /// Begin a session for a freshly loaded page.
    ///
    /// `field_text` is the text field's value at load. The context's
    /// `original_text`, when present, takes precedence as the baseline; a
    /// field that already differs from it starts out dirty.
    pub fn start(
        context: EditingContext,
        field_text: &str,
        store: S,
        config: EnhancerConfig,
    ) -> Self {
        let key = context.draft_key(&config);
        let drafts = DraftStore::new(store, key);
        let draft_available = config.autosave && drafts.exists();
        let original = context
            .original_text
            .clone()
            .unwrap_or_else(|| field_text.to_owned());

        tracing::debug!(
            key = drafts.key(),
            draft_available,
            autosave = config.autosave,
            "edit session started"
        );

        Self {
            tracker: DirtyTracker::with_loaded_text(original, field_text),
            drafts,
            guard: NavigationGuard::new(),
            autosave: AutosaveState::Idle,
            draft_available,
            config,
            context,
        }
    }

    pub fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    pub fn context(&self) -> &EditingContext {
        &self.context
    }

    pub fn draft_key(&self) -> &str {
        self.drafts.key()
    }

    pub fn drafts(&self) -> &DraftStore<S> {
        &self.drafts
    }

    pub fn initial_view(&self) -> InitialView {
        InitialView {
            status: self.tracker.initial_view(),
            draft_available: self.draft_available,
        }
    }

    /// Status for the most recently observed text, or the baseline if
    /// nothing has been observed yet.
    pub fn current_view(&self) -> StatusView {
        let original = self.tracker.original_text();
        StatusView::for_text(self.tracker.last_seen().unwrap_or(original), original)
    }

    pub fn draft_available(&self) -> bool {
        self.draft_available
    }

    pub fn dirty_state(&self) -> DirtyState {
        self.tracker.state()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    pub fn autosave_state(&self) -> AutosaveState {
        self.autosave
    }

    /// Feed the text field's current value.
    pub fn handle_input(&mut self, text: &str) -> InputEffect {
        let Some(status) = self.tracker.observe(text) else {
            return InputEffect::Unchanged;
        };

        let start_autosave = self.config.autosave && self.autosave == AutosaveState::Idle;
        if start_autosave {
            self.autosave = AutosaveState::Running;
            tracing::debug!(
                period_ms = self.config.autosave_interval_ms,
                "autosave scheduled"
            );
        }

        InputEffect::Changed {
            status,
            start_autosave,
        }
    }

    /// Interval tick. `live_text` must be read from the field at tick time.
    ///
    /// Returns whether a draft was written.
    pub fn autosave_tick(&mut self, live_text: &str) -> bool {
        if self.autosave == AutosaveState::Stopped {
            tracing::debug!("autosave tick after stop, skipping");
            return false;
        }
        self.drafts.persist(live_text)
    }

    /// Fetch the stored draft for the restore affordance.
    ///
    /// Hides the affordance but keeps the record; it is only deleted by Save.
    pub fn restore_draft(&mut self) -> Option<String> {
        self.draft_available = false;
        let draft = self.drafts.load();
        if draft.is_none() {
            tracing::warn!(key = self.drafts.key(), "restore requested but no draft stored");
        }
        draft
    }

    /// Save or Preview was clicked.
    pub fn submit(&mut self, action: SubmitAction) -> SubmitEffect {
        if self.guard.disarm(action) {
            tracing::info!(?action, "leave guard disarmed");
        }

        match action {
            SubmitAction::Save => {
                self.drafts.clear();
                let stop_autosave = self.autosave == AutosaveState::Running;
                self.autosave = AutosaveState::Stopped;
                SubmitEffect { stop_autosave }
            }
            SubmitAction::Preview => SubmitEffect {
                stop_autosave: false,
            },
        }
    }

    /// Message for the leave confirmation, if one is due.
    pub fn leave_prompt(&self) -> Option<&str> {
        self.guard
            .prompt(self.tracker.is_dirty(), &self.config.leave_warning)
    }

    /// Class attribute for the text field after picking `font`.
    pub fn font_class(&self, current: &str, font: FontFamily) -> String {
        swap_font_class(current, &self.config.font_class_prefix, font)
    }

    pub fn check_slug(&self, value: &str) -> SlugCheck {
        check_slug(value, &self.config.reserved_slugs)
    }
}
