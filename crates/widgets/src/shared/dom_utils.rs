//! Thin lookup and mutation helpers over the page DOM.
//!
//! Lookups come in two flavors: `require_*` treats a missing element as a
//! markup/state mismatch and fails the operation, plain `get_element_by_id`
//! at the call site is for elements that may legitimately be gone.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

/// The page document. Fails outside of a browser context.
pub fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "Document is not available".to_string())
}

pub fn require_element(document: &Document, id: &str) -> Result<Element, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("Element `#{}` not found", id))
}

pub fn require_html_element(document: &Document, id: &str) -> Result<HtmlElement, String> {
    require_element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("Element `#{}` is not an html element", id))
}

pub fn require_input(document: &Document, id: &str) -> Result<HtmlInputElement, String> {
    require_element(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| format!("Element `#{}` is not an input", id))
}

pub fn require_select(document: &Document, id: &str) -> Result<HtmlSelectElement, String> {
    require_element(document, id)?
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| format!("Element `#{}` is not a select", id))
}

/// Adds or removes `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let class_list = element.class_list();
    let _ = if on {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
}

/// Adds or removes `class` on every element matching `selector` under
/// `root`.
pub fn set_class_all(root: &Element, selector: &str, class: &str, on: bool) -> Result<(), String> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|_| format!("Invalid selector `{}`", selector))?;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        set_class(&element, class, on);
    }
    Ok(())
}

/// Removes every element matching `selector` from the page.
pub fn remove_all(document: &Document, selector: &str) -> Result<(), String> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| format!("Invalid selector `{}`", selector))?;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        element.remove();
    }
    Ok(())
}

/// Creates a detached hidden input carrying one confirmed value.
pub fn create_hidden_input(
    document: &Document,
    name: &str,
    value: &str,
) -> Result<HtmlInputElement, String> {
    let input = document
        .create_element("input")
        .map_err(|_| "Failed to create input element".to_string())?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| "Created element is not an input".to_string())?;
    input.set_hidden(true);
    input.set_name(name);
    input.set_value(value);
    Ok(input)
}
