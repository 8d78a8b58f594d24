//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use pagedraft_core::{AutosaveState, EditSession, GuardState, KeyValueStore};

/// Snapshot of the enhancer's state.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct EditorStatus {
    pub dirty: bool,
    pub char_count: usize,
    pub char_count_label: String,
    pub draft_key: String,
    /// The restore link is still on screen.
    pub draft_available: bool,
    pub guard_armed: bool,
    /// `"idle"`, `"running"` or `"stopped"`.
    pub autosave: String,
}

impl<S: KeyValueStore> From<&EditSession<S>> for EditorStatus {
    fn from(session: &EditSession<S>) -> Self {
        let view = session.current_view();
        let autosave = match session.autosave_state() {
            AutosaveState::Idle => "idle",
            AutosaveState::Running => "running",
            AutosaveState::Stopped => "stopped",
        };

        Self {
            dirty: session.is_dirty(),
            char_count: view.char_count,
            char_count_label: view.char_count_label(),
            draft_key: session.draft_key().to_owned(),
            draft_available: session.draft_available(),
            guard_armed: session.guard_state() == GuardState::Armed,
            autosave: autosave.to_owned(),
        }
    }
}
