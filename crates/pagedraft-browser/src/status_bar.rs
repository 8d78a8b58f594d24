//! The strip above the text field.
//!
//! Rendered once into the host's status container:
//!
//! ```html
//! <span class="oti-modified">&nbsp;</span>
//! <span class="oti-charcount">5 chars</span>
//! <span class="oti-fontselect"><select>...</select></span>
//! <span class="oti-draft"><a href="#">Draft found</a></span>
//! ```
//!
//! Each span is kept as a handle, so later updates never walk the container's
//! children by position.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlOptionElement, HtmlSelectElement};

use pagedraft_core::{EnhancerConfig, FontFamily, InitialView, StatusView};

use crate::error::EnhanceError;

pub const MODIFIED_CLASS: &str = "oti-modified";
pub const CHARCOUNT_CLASS: &str = "oti-charcount";
pub const FONTSELECT_CLASS: &str = "oti-fontselect";
pub const DRAFT_CLASS: &str = "oti-draft";

const RESTORE_LABEL: &str = "Draft found";

#[derive(Debug)]
pub struct StatusBar {
    modified: HtmlElement,
    char_count: HtmlElement,
    font_select: HtmlSelectElement,
    draft: HtmlElement,
    restore_link: Option<HtmlElement>,
}

impl StatusBar {
    /// Replace the container's content with a fresh status bar.
    pub fn render(
        document: &Document,
        container: &HtmlElement,
        initial: &InitialView,
        config: &EnhancerConfig,
    ) -> Result<Self, EnhanceError> {
        container.set_inner_html("");

        let modified = append_span(document, container, MODIFIED_CLASS)?;
        append_space(document, container)?;
        let char_count = append_span(document, container, CHARCOUNT_CLASS)?;
        append_space(document, container)?;

        let font_span = append_span(document, container, FONTSELECT_CLASS)?;
        let font_select: HtmlSelectElement = create(document, "select")?;
        for font in FontFamily::ALL {
            let option: HtmlOptionElement = create(document, "option")?;
            option.set_value(font.as_str());
            option.set_text(font.label());
            font_select.append_child(&option)?;
        }
        font_span.append_child(&font_select)?;
        append_space(document, container)?;

        let draft = append_span(document, container, DRAFT_CLASS)?;
        let restore_link = if initial.draft_available {
            let link: HtmlElement = create(document, "a")?;
            link.set_attribute("href", "#")?;
            link.set_text_content(Some(RESTORE_LABEL));
            draft.append_child(&link)?;
            Some(link)
        } else {
            None
        };

        let bar = Self {
            modified,
            char_count,
            font_select,
            draft,
            restore_link,
        };
        bar.update(&initial.status, config);
        Ok(bar)
    }

    /// Show a new status. Touches only the two text slots.
    pub fn update(&self, status: &StatusView, config: &EnhancerConfig) {
        self.modified.set_text_content(Some(status.marker(config)));
        self.char_count
            .set_text_content(Some(&status.char_count_label()));
    }

    pub fn font_select(&self) -> &HtmlSelectElement {
        &self.font_select
    }

    /// The "Draft found" link, if a draft existed at attach time.
    pub fn restore_link(&self) -> Option<&HtmlElement> {
        self.restore_link.as_ref()
    }

    /// Remove the restore link from the page.
    pub fn clear_draft_affordance(&self) {
        self.draft.set_inner_html("");
    }

    pub fn modified_text(&self) -> String {
        self.modified.text_content().unwrap_or_default()
    }

    pub fn char_count_text(&self) -> String {
        self.char_count.text_content().unwrap_or_default()
    }
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, EnhanceError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| EnhanceError::WrongElement {
            selector: tag.to_owned(),
            expected: std::any::type_name::<T>(),
        })
}

fn append_span(
    document: &Document,
    container: &HtmlElement,
    class: &str,
) -> Result<HtmlElement, EnhanceError> {
    let span: HtmlElement = create(document, "span")?;
    span.set_class_name(class);
    container.append_child(&span)?;
    Ok(span)
}

fn append_space(document: &Document, container: &HtmlElement) -> Result<(), EnhanceError> {
    container.append_child(&document.create_text_node(" "))?;
    Ok(())
}
