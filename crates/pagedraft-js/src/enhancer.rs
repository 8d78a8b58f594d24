//! JsPageEnhancer - the handle returned to JavaScript.
//!
//! A page gets at most one set of enhancements. The auto-attached one lives
//! in a thread-local until `enhanceEditor` replaces it; a second
//! `enhanceEditor` while a handle is attached fails.

use std::cell::{Cell, RefCell};

use gloo_events::EventListener;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use pagedraft_browser::{BrowserStore, EnhanceError, PageEnhancer};
use pagedraft_core::{EditingContext, EnhancerConfig};

use crate::page_info;
use crate::types::EditorStatus;

/// Options accepted by `enhanceEditor`. Everything is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EnhanceOptions {
    /// Overrides `page_info.editing`.
    editing: Option<EditingContext>,
    config: EnhancerConfig,
}

thread_local! {
    static AUTO_ATTACHED: RefCell<Option<PageEnhancer<BrowserStore>>> = const { RefCell::new(None) };
    static HANDLE_ATTACHED: Cell<bool> = const { Cell::new(false) };
}

#[derive(thiserror::Error, Debug)]
enum SetupError {
    #[error("editor enhancements are already attached; detach the existing handle first")]
    AlreadyAttached,

    #[error("invalid options: {0}")]
    Options(#[from] serde_wasm_bindgen::Error),

    #[error(transparent)]
    Enhance(#[from] EnhanceError),
}

/// Enhancements attached to the edit form.
///
/// Dropping or detaching the handle removes every listener and stops the
/// autosave; the form goes back to being a plain form.
#[wasm_bindgen]
pub struct JsPageEnhancer {
    inner: Option<PageEnhancer<BrowserStore>>,
}

/// Attach the enhancements to the current page.
///
/// `options` may be omitted. Without `options.editing` the page identity is
/// read from the `page_info` global.
#[wasm_bindgen(js_name = enhanceEditor)]
pub fn enhance_editor(options: JsValue) -> Result<JsPageEnhancer, JsError> {
    if HANDLE_ATTACHED.get() {
        return Err(SetupError::AlreadyAttached.into());
    }
    // Tear the auto-attached copy down first so its status bar, timer and
    // leave guard are gone before the new ones go in.
    if AUTO_ATTACHED.take().is_some() {
        tracing::debug!("replacing auto-attached enhancements");
    }

    let inner = attach(options)?;
    HANDLE_ATTACHED.set(true);
    Ok(JsPageEnhancer { inner: Some(inner) })
}

fn attach(options: JsValue) -> Result<PageEnhancer<BrowserStore>, SetupError> {
    let options: EnhanceOptions = if options.is_undefined() || options.is_null() {
        EnhanceOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    let context = match options.editing {
        Some(context) => context,
        None => page_info::editing_context()?,
    };
    Ok(PageEnhancer::attach(
        context,
        BrowserStore::local(),
        options.config,
    )?)
}

/// Attach with defaults once the DOM is parsed. Failures only get logged;
/// the page keeps its plain form.
pub(crate) fn auto_attach() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| attach_for_page_lifetime())
            .forget();
    } else {
        attach_for_page_lifetime();
    }
}

fn attach_for_page_lifetime() {
    if is_attached() {
        tracing::debug!("enhancements already attached, skipping auto-attach");
        return;
    }
    match attach(JsValue::UNDEFINED) {
        // Lives until the page unloads or `enhanceEditor` takes over.
        Ok(enhancer) => AUTO_ATTACHED.set(Some(enhancer)),
        Err(e) => tracing::warn!("Editor enhancements not attached: {}", e),
    }
}

fn is_attached() -> bool {
    HANDLE_ATTACHED.get() || AUTO_ATTACHED.with_borrow(Option::is_some)
}

#[wasm_bindgen]
impl JsPageEnhancer {
    /// Check if the text differs from what the page loaded with.
    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.inner.as_ref().is_some_and(|e| e.is_dirty())
    }

    /// The leave confirmation message, if leaving would prompt right now.
    #[wasm_bindgen(js_name = leavePrompt)]
    pub fn leave_prompt(&self) -> Option<String> {
        self.inner.as_ref().and_then(|e| e.leave_prompt())
    }

    /// Get a snapshot of the enhancer state.
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> Result<EditorStatus, JsError> {
        let enhancer = self
            .inner
            .as_ref()
            .ok_or_else(|| JsError::new("Enhancer is detached"))?;
        Ok(enhancer.with_session(|session| EditorStatus::from(session)))
    }

    /// Load the stored draft into the text field.
    #[wasm_bindgen(js_name = restoreDraft)]
    pub fn restore_draft(&self) {
        if let Some(enhancer) = &self.inner {
            enhancer.restore_draft();
        }
    }

    /// Write the draft now instead of waiting for the next tick.
    #[wasm_bindgen(js_name = saveDraftNow)]
    pub fn save_draft_now(&self) -> bool {
        self.inner.as_ref().is_some_and(|e| e.autosave_now())
    }

    /// Check if the enhancements are still attached.
    #[wasm_bindgen(js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.inner.is_some()
    }

    /// Remove all listeners and stop the autosave.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        if self.inner.take().is_some() {
            HANDLE_ATTACHED.set(false);
            tracing::info!("editor enhancements detached");
        }
    }
}

impl Drop for JsPageEnhancer {
    fn drop(&mut self) {
        if self.inner.is_some() {
            HANDLE_ATTACHED.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlTextAreaElement};

    /// Minimal edit form using the stock selectors, removed on drop.
    struct Form {
        root: Element,
        text: HtmlTextAreaElement,
    }

    impl Form {
        fn new(text: &str) -> Self {
            let document = web_sys::window().unwrap().document().unwrap();
            let root = document.create_element("form").unwrap();
            root.set_inner_html(
                r##"<input class="url-input">
                <div class="over-text-input"></div>
                <textarea class="text-input"></textarea>
                <button type="button" id="save-button"></button>
                <button type="button" id="preview-button"></button>"##,
            );
            document.body().unwrap().append_child(&root).unwrap();
            let text_area: HtmlTextAreaElement = root
                .query_selector(".text-input")
                .unwrap()
                .unwrap()
                .unchecked_into();
            text_area.set_value(text);
            Self {
                root,
                text: text_area,
            }
        }

        fn type_text(&self, value: &str) {
            self.text.set_value(value);
            self.text
                .dispatch_event(&Event::new("input").unwrap())
                .unwrap();
        }

        fn status_spans(&self, class: &str) -> u32 {
            self.root
                .query_selector_all(&format!(".{class}"))
                .unwrap()
                .length()
        }
    }

    impl Drop for Form {
        fn drop(&mut self) {
            AUTO_ATTACHED.take();
            self.root.remove();
        }
    }

    fn leave_is_blocked() -> bool {
        let init = EventInit::new();
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("beforeunload", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
        event.default_prevented()
    }

    #[wasm_bindgen_test]
    fn test_second_enhance_editor_is_rejected() {
        let _form = Form::new("Hello");

        let first = enhance_editor(JsValue::UNDEFINED).unwrap();
        assert!(enhance_editor(JsValue::UNDEFINED).is_err());

        // Dropping the handle frees the page for a new one.
        drop(first);
        let mut again = enhance_editor(JsValue::UNDEFINED).unwrap();
        assert!(again.is_attached());
        again.detach();
        assert!(!HANDLE_ATTACHED.get());
    }

    #[wasm_bindgen_test]
    fn test_enhance_editor_takes_over_auto_attached() {
        let form = Form::new("Hello");

        attach_for_page_lifetime();
        assert!(AUTO_ATTACHED.with_borrow(Option::is_some));
        form.type_text("Hello, world");
        assert!(leave_is_blocked());

        let mut handle = enhance_editor(JsValue::UNDEFINED).unwrap();
        assert!(AUTO_ATTACHED.with_borrow(Option::is_none));
        assert_eq!(form.status_spans("oti-charcount"), 1);

        form.type_text("Hello, world!");
        let status = handle.get_status().unwrap();
        assert_eq!(status.autosave, "running");
        assert_eq!(status.char_count, 13);

        handle.detach();
        assert!(!leave_is_blocked());
    }

    #[wasm_bindgen_test]
    fn test_auto_attach_skips_when_handle_exists() {
        let form = Form::new("Hello");

        let mut handle = enhance_editor(JsValue::UNDEFINED).unwrap();
        attach_for_page_lifetime();
        assert!(AUTO_ATTACHED.with_borrow(Option::is_none));
        assert_eq!(form.status_spans("oti-modified"), 1);

        handle.detach();
    }

    #[wasm_bindgen_test]
    fn test_auto_attach_runs_once() {
        let form = Form::new("Hello");

        attach_for_page_lifetime();
        attach_for_page_lifetime();
        assert_eq!(form.status_spans("oti-charcount"), 1);
    }

    #[wasm_bindgen_test]
    fn test_options_pick_config_and_context() {
        let form = Form::new("Hello");
        let options = js_sys::JSON::parse(
            r#"{ "editing": { "page_id": 9 }, "config": { "autosave": false } }"#,
        )
        .unwrap();

        let mut handle = enhance_editor(options).unwrap();
        form.type_text("Hello!");
        let status = handle.get_status().unwrap();
        assert_eq!(status.draft_key, "draft9");
        assert_eq!(status.autosave, "idle");
        assert!(status.dirty);

        handle.detach();
        assert!(handle.get_status().is_err());
    }
}
