//! Enhancer configuration.
//!
//! Every field has a default, so hosts can pass a partial object (or nothing)
//! and only override what differs from the stock editor page.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Page URLs the server refuses to hand out as slugs.
pub const DEFAULT_RESERVED_SLUGS: &[&str] = &[
    "create",
    "edit",
    "p",
    "ajax",
    "history",
    "manage",
    "static",
    "media",
    "accounts",
    "tags",
    "init-config",
    "upload",
    "upload-info",
    "about",
    "stats",
    "terms",
    "privacy",
    "easter",
    "search",
    "help",
    "circles",
    "protect",
    "kt",
    "embed",
];

/// Tunables for the editor enhancement layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhancerConfig {
    /// Schedule periodic draft saves and offer to restore existing drafts.
    ///
    /// With this off the enhancer only tracks changes, guards navigation and
    /// validates the slug.
    pub autosave: bool,

    /// Period between autosave ticks in milliseconds.
    pub autosave_interval_ms: u32,

    /// Prefix of the localStorage key holding a page's draft.
    pub draft_key_prefix: SmolStr,

    /// Key suffix used when the page has no identifier yet.
    pub new_page_sentinel: SmolStr,

    /// Shown in the status bar while the text differs from its baseline.
    pub modified_marker: SmolStr,

    /// Message handed to the browser's leave confirmation.
    pub leave_warning: String,

    /// Class prefix for font tokens on the text field (`ti-font-serif`, ...).
    pub font_class_prefix: SmolStr,

    /// Class applied to the slug input when it contains disallowed characters.
    pub slug_error_class: SmolStr,

    /// Class applied to the slug input when it names a reserved page URL.
    pub reserved_slug_class: SmolStr,

    /// Slugs the server will reject even though they match the pattern.
    pub reserved_slugs: Vec<SmolStr>,

    /// Where to find the host page's elements.
    pub selectors: HostSelectors,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            autosave: true,
            autosave_interval_ms: 30_000,
            draft_key_prefix: SmolStr::new_static("draft"),
            new_page_sentinel: SmolStr::new_static("new"),
            modified_marker: SmolStr::new_static("(*)"),
            leave_warning: "Are you sure you want to leave editing this page?".to_owned(),
            font_class_prefix: SmolStr::new_static("ti-font-"),
            slug_error_class: SmolStr::new_static("error"),
            reserved_slug_class: SmolStr::new_static("reserved"),
            reserved_slugs: DEFAULT_RESERVED_SLUGS
                .iter()
                .copied()
                .map(SmolStr::new_static)
                .collect(),
            selectors: HostSelectors::default(),
        }
    }
}

/// CSS selectors for the elements the host page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostSelectors {
    pub text_input: String,
    pub status_container: String,
    pub slug_input: String,
    pub save_button: String,
    pub preview_button: String,
}

impl Default for HostSelectors {
    fn default() -> Self {
        Self {
            text_input: ".text-input".to_owned(),
            status_container: ".over-text-input".to_owned(),
            slug_input: ".url-input".to_owned(),
            save_button: "#save-button".to_owned(),
            preview_button: "#preview-button".to_owned(),
        }
    }
}
