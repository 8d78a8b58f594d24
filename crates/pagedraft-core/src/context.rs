//! The host page's editing context.
//!
//! The server renders `page_info.editing` into the edit page. Only the page id
//! matters for draft scoping; `original_text` is set on preview round-trips,
//! where the form comes back holding the user's edited text.

use serde::{Deserialize, Deserializer, Serialize};
use smol_str::{SmolStr, ToSmolStr};

use crate::config::EnhancerConfig;

/// Identity of the page being edited. Fixed for the lifetime of the view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditingContext {
    /// Server id of the page; `None` while creating a new page.
    #[serde(default, deserialize_with = "page_id_from_any")]
    pub page_id: Option<SmolStr>,

    /// Text the page had before this editing session, if the server knows it.
    #[serde(default)]
    pub original_text: Option<String>,
}

impl EditingContext {
    /// Context for an existing page.
    pub fn for_page(page_id: impl Into<SmolStr>) -> Self {
        Self {
            page_id: Some(page_id.into()),
            original_text: None,
        }
    }

    /// Context for a page that has not been saved yet.
    pub fn new_page() -> Self {
        Self::default()
    }

    /// Storage key of this page's draft: prefix followed by the id or the
    /// new-page sentinel.
    pub fn draft_key(&self, config: &EnhancerConfig) -> String {
        let suffix = self
            .page_id
            .as_deref()
            .unwrap_or(config.new_page_sentinel.as_str());
        format!("{}{}", config.draft_key_prefix, suffix)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPageId {
    Text(SmolStr),
    Number(i64),
    Float(f64),
}

/// Accept string or numeric ids. Empty strings and zero count as absent,
/// matching the falsy check the server-rendered page relies on.
fn page_id_from_any<'de, D>(deserializer: D) -> Result<Option<SmolStr>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPageId>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPageId::Text(s)) if !s.is_empty() => Some(s),
        Some(RawPageId::Number(n)) if n != 0 => Some(n.to_smolstr()),
        // JS numbers arrive as floats from some bridges.
        Some(RawPageId::Float(f)) if f != 0.0 && f.fract() == 0.0 => Some((f as i64).to_smolstr()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_key_uses_page_id() {
        let config = EnhancerConfig::default();
        assert_eq!(EditingContext::for_page("42").draft_key(&config), "draft42");
    }

    #[test]
    fn test_draft_key_falls_back_to_sentinel() {
        let config = EnhancerConfig::default();
        assert_eq!(EditingContext::new_page().draft_key(&config), "draftnew");
    }

    #[test]
    fn test_numeric_page_id() {
        let ctx: EditingContext = serde_json::from_str(r#"{ "page_id": 42 }"#).unwrap();
        assert_eq!(ctx.page_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_falsy_page_ids_are_absent() {
        for raw in [
            r#"{ "page_id": null }"#,
            r#"{ "page_id": "" }"#,
            r#"{ "page_id": 0 }"#,
            r#"{}"#,
        ] {
            let ctx: EditingContext = serde_json::from_str(raw).unwrap();
            assert_eq!(ctx.page_id, None, "{raw}");
        }
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let ctx: EditingContext = serde_json::from_str(
            r#"{ "page_id": 7, "original_text": null, "preview_text": "draft text" }"#,
        )
        .unwrap();
        assert_eq!(ctx.page_id.as_deref(), Some("7"));
        assert_eq!(ctx.original_text, None);
    }
}
