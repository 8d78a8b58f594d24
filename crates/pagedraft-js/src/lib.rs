//! WASM bindings for the pagedraft editor enhancements.
//!
//! Load the module on the edit page. If the server rendered a `page_info`
//! global, the enhancements attach themselves once the DOM is ready. Hosts
//! that want control call `enhanceEditor(options)`, which replaces the
//! auto-attached copy, and keep the returned handle.

mod enhancer;
mod page_info;
mod types;

pub use enhancer::*;
pub use types::*;

use wasm_bindgen::prelude::*;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Initialize panic hook and logging, then auto-attach if the page asks for it.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_tracing();

    if page_info::is_present() {
        enhancer::auto_attach();
    }
}

fn init_tracing() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // Another module on the page may already own the global subscriber.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
