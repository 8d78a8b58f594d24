//! The `page_info` global the server renders into edit pages.
//!
//! ```js
//! var page_info = { editing: { page_id: 42, original_text: null, preview_text: "..." } };
//! ```

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use pagedraft_core::EditingContext;

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Whether the page defines `page_info` at all.
pub(crate) fn is_present() -> bool {
    lookup(&js_sys::global(), "page_info").is_some()
}

/// `page_info.editing`; a missing object means a new page.
pub(crate) fn editing_context() -> Result<EditingContext, serde_wasm_bindgen::Error> {
    match lookup(&js_sys::global(), "page_info").and_then(|info| lookup(&info, "editing")) {
        Some(editing) => serde_wasm_bindgen::from_value(editing),
        None => Ok(EditingContext::new_page()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn set_page_info(json: &str) {
        let value = js_sys::JSON::parse(json).unwrap();
        Reflect::set(&js_sys::global(), &JsValue::from_str("page_info"), &value).unwrap();
    }

    fn clear_page_info() {
        Reflect::delete_property(&js_sys::global(), &JsValue::from_str("page_info")).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_missing_page_info_is_new_page() {
        clear_page_info();
        assert!(!is_present());
        assert_eq!(editing_context().unwrap(), EditingContext::new_page());
    }

    #[wasm_bindgen_test]
    fn test_reads_editing_object() {
        set_page_info(
            r#"{ "editing": { "page_id": 42, "original_text": "before", "preview_text": "after" } }"#,
        );
        assert!(is_present());

        let context = editing_context().unwrap();
        assert_eq!(context.page_id.as_deref(), Some("42"));
        assert_eq!(context.original_text.as_deref(), Some("before"));
        clear_page_info();
    }

    #[wasm_bindgen_test]
    fn test_page_info_without_editing() {
        set_page_info(r#"{ "site": "example" }"#);
        assert!(is_present());
        assert_eq!(editing_context().unwrap(), EditingContext::new_page());
        clear_page_info();
    }
}
