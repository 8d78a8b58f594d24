//! Browser DOM layer for the pagedraft editor enhancements.
//!
//! This crate attaches `pagedraft-core`'s session logic to a server-rendered
//! edit form. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `host`: locating the form elements the page already rendered
//! - `status_bar`: the modification / char count / font / draft strip
//! - `storage`: `localStorage`-backed `KeyValueStore`
//! - `enhancer`: listeners, autosave interval and leave guard
//!
//! # Re-exports
//!
//! This crate re-exports `pagedraft-core` for convenience, so consumers
//! only need to depend on `pagedraft-browser`.

// Re-export core crate
pub use pagedraft_core;
pub use pagedraft_core::*;

pub mod enhancer;
pub mod error;
pub mod host;
pub mod status_bar;
pub mod storage;

pub use enhancer::PageEnhancer;
pub use error::EnhanceError;
pub use host::{HostElements, TextField};
pub use status_bar::StatusBar;
pub use storage::BrowserStore;
