//! Duplicating text inputs: a form may render one input for a name and
//! let the user add more fields answering to the same name.

use contracts::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::shared::{dom_utils, registry};

/// Appends an empty copy of the last input named `input_name` right after
/// it. Clone ids extend the group name with an index that keeps growing
/// for the lifetime of the page, so ids never repeat.
#[wasm_bindgen(js_name = cloneInputComponent)]
pub fn clone_input_component(input_name: String) -> Result<(), JsError> {
    clone_last_input(&input_name).map_err(|e| {
        log::error!("cloneInputComponent failed: {e}");
        JsError::new(&e)
    })
}

fn clone_last_input(input_name: &str) -> Result<(), String> {
    let document = dom_utils::document()?;

    let inputs = document.get_elements_by_name(input_name);
    if inputs.length() == 0 {
        return Err(format!("No elements named `{}` to clone", input_name));
    }

    let last = inputs
        .item(inputs.length() - 1)
        .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| format!("Last element named `{}` is not an input", input_name))?;

    let clone = last
        .clone_node_with_deep(true)
        .map_err(|_| format!("Failed to clone input `{}`", input_name))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| format!("Cloned `{}` node is not an input", input_name))?;

    clone.set_value("");
    let index = registry::next_clone_index(input_name, inputs.length());
    clone.set_id(&dom::cloned_input_id(input_name, index));

    last.insert_adjacent_element("afterend", &clone)
        .map_err(|_| format!("Failed to insert clone of `{}`", input_name))?;
    Ok(())
}
