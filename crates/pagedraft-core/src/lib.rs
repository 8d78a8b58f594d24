//! pagedraft-core: page editor enhancement logic without DOM dependencies.
//!
//! This crate provides:
//! - `DirtyTracker` - change detection against the text loaded with the page
//! - `DraftStore` over any `KeyValueStore` - per-page draft persistence
//! - `NavigationGuard` - leave confirmation, disarmed by Save/Preview
//! - status bar strings, font class swapping and slug checking
//! - `EditSession` - ties the above together and emits effects for the
//!   platform layer to apply

pub mod config;
pub mod context;
pub mod draft;
pub mod error;
pub mod guard;
pub mod session;
pub mod slug;
pub mod status;
pub mod tracker;

pub use config::{DEFAULT_RESERVED_SLUGS, EnhancerConfig, HostSelectors};
pub use context::EditingContext;
pub use draft::{DraftStore, KeyValueStore, MemoryStore};
pub use error::StorageError;
pub use guard::{GuardState, NavigationGuard, SubmitAction};
pub use session::{AutosaveState, EditSession, InitialView, InputEffect, SubmitEffect};
pub use slug::{SlugCheck, check_slug, is_valid_slug};
pub use smol_str::SmolStr;
pub use status::{
    CLEAN_MARKER, FontFamily, StatusView, UnknownFont, char_count_label, modification_label,
    swap_font_class,
};
pub use tracker::{DirtyState, DirtyTracker};
