//! The host page's form elements.
//!
//! The server renders the whole form; nothing here creates elements. Every
//! lookup is checked so a page missing a piece just goes without
//! enhancements instead of throwing halfway through setup.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use pagedraft_core::HostSelectors;

use crate::error::EnhanceError;

/// The page text field. Usually a `<textarea>`, but a single-line input works.
#[derive(Debug, Clone)]
pub enum TextField {
    Area(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl TextField {
    pub fn value(&self) -> String {
        match self {
            TextField::Area(el) => el.value(),
            TextField::Input(el) => el.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            TextField::Area(el) => el.set_value(value),
            TextField::Input(el) => el.set_value(value),
        }
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            TextField::Area(el) => el.as_ref(),
            TextField::Input(el) => el.as_ref(),
        }
    }

    pub fn class_name(&self) -> String {
        self.element().class_name()
    }

    pub fn set_class_name(&self, value: &str) {
        self.element().set_class_name(value);
    }

    fn from_element(element: Element, selector: &str) -> Result<Self, EnhanceError> {
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Ok(TextField::Area(area)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlInputElement>()
            .map(TextField::Input)
            .map_err(|_| EnhanceError::WrongElement {
                selector: selector.to_owned(),
                expected: "textarea or input",
            })
    }
}

/// Handles to every element the enhancer reads or writes.
#[derive(Debug, Clone)]
pub struct HostElements {
    pub text_input: TextField,
    pub status_container: HtmlElement,
    pub slug_input: HtmlInputElement,
    pub save_button: HtmlElement,
    pub preview_button: HtmlElement,
}

impl HostElements {
    /// Find all elements below `root`.
    pub fn locate(root: &Element, selectors: &HostSelectors) -> Result<Self, EnhanceError> {
        let text_input =
            TextField::from_element(find(root, &selectors.text_input)?, &selectors.text_input)?;

        Ok(Self {
            text_input,
            status_container: find_as(root, &selectors.status_container, "HTML element")?,
            slug_input: find_as(root, &selectors.slug_input, "input")?,
            save_button: find_as(root, &selectors.save_button, "HTML element")?,
            preview_button: find_as(root, &selectors.preview_button, "HTML element")?,
        })
    }
}

fn find(root: &Element, selector: &str) -> Result<Element, EnhanceError> {
    root.query_selector(selector)?
        .ok_or_else(|| EnhanceError::MissingElement(selector.to_owned()))
}

fn find_as<T: JsCast>(
    root: &Element,
    selector: &str,
    expected: &'static str,
) -> Result<T, EnhanceError> {
    find(root, selector)?
        .dyn_into::<T>()
        .map_err(|_| EnhanceError::WrongElement {
            selector: selector.to_owned(),
            expected,
        })
}
