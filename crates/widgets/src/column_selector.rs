//! Column selector widget: toggle columns inside an expanded preview and
//! confirm the choice into hidden form fields.
//!
//! The hidden fields are the authoritative state read on form submission.
//! Confirmation fully replaces them before the in-progress choice is
//! dropped, and a failure while refreshing the visible summary never rolls
//! the fields back.

use contracts::dom;
use contracts::ids::{ComponentId, PreviewKey, TableTransientId};
use contracts::selection::ConfirmedChoice;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::preview;
use crate::shared::{dom_utils, registry};

/// Flips `column_name` in the widget's pending choice and restyles every
/// cell of column `column_index` in the expanded preview to match.
#[wasm_bindgen(js_name = toggleColumnSelection)]
pub fn toggle_column_selection(
    column_name: String,
    column_index: u32,
    component_id: String,
    table_transient_id: String,
) -> Result<(), JsError> {
    let key = PreviewKey::new(
        ComponentId::new(component_id),
        TableTransientId::new(table_transient_id),
    );
    toggle_column(&column_name, column_index, &key).map_err(|e| {
        log::error!("toggleColumnSelection failed: {e}");
        JsError::new(&e)
    })
}

/// Highlights every cell of a column while the pointer is over it.
#[wasm_bindgen(js_name = hoverColumn)]
pub fn hover_column(column_index: u32, component_id: String, table_transient_id: String) {
    let key = PreviewKey::new(
        ComponentId::new(component_id),
        TableTransientId::new(table_transient_id),
    );
    set_column_hovered(column_index, &key, true);
}

/// Clears the hover highlight from every cell of a column.
#[wasm_bindgen(js_name = unhoverColumn)]
pub fn unhover_column(column_index: u32, component_id: String, table_transient_id: String) {
    let key = PreviewKey::new(
        ComponentId::new(component_id),
        TableTransientId::new(table_transient_id),
    );
    set_column_hovered(column_index, &key, false);
}

/// Commits the widget's pending table and column choice into the
/// enclosing form, folds the preview and reveals the summary lines.
#[wasm_bindgen(js_name = confirmChoice)]
pub fn confirm_choice(component_id: String, table_transient_id: String) -> Result<(), JsError> {
    let key = PreviewKey::new(
        ComponentId::new(component_id),
        TableTransientId::new(table_transient_id),
    );
    commit_choice(&key).map_err(|e| {
        log::error!("confirmChoice failed: {e}");
        JsError::new(&e)
    })
}

fn toggle_column(column_name: &str, column_index: u32, key: &PreviewKey) -> Result<(), String> {
    let document = dom_utils::document()?;
    let expanded = dom_utils::require_element(&document, &dom::expanded_preview_id(key))?;

    let selected = registry::with_controller(&key.component, |c| c.toggle_column(column_name))
        .map_err(|e| e.to_string())?;

    // cells are styled from the stored membership, not flipped blindly,
    // so the page can never drift away from the choice
    dom_utils::set_class_all(
        &expanded,
        &format!(".{}", dom::column_cell_class(column_index)),
        dom::CLASS_SELECTED_COLUMN,
        selected,
    )
}

fn set_column_hovered(column_index: u32, key: &PreviewKey, hovered: bool) {
    let Ok(document) = dom_utils::document() else {
        return;
    };
    // hover events can trail behind a folded preview, absence is fine
    let Some(expanded) = document.get_element_by_id(&dom::expanded_preview_id(key)) else {
        return;
    };
    let _ = dom_utils::set_class_all(
        &expanded,
        &format!(".{}", dom::column_cell_class(column_index)),
        dom::CLASS_HOVERED_COLUMN,
        hovered,
    );
}

fn commit_choice(key: &PreviewKey) -> Result<(), String> {
    let document = dom_utils::document()?;

    let choice = registry::with_controller(&key.component, |c| c.confirmed_snapshot())
        .map_err(|e| e.to_string())?;

    // commit: table name first, then a full replace of the column inputs
    let table_name_input =
        dom_utils::require_input(&document, &dom::table_name_input_id(&key.component))?;
    table_name_input.set_value(&choice.table);

    let inputs_name = dom::column_inputs_name(&key.component);
    dom_utils::remove_all(&document, &format!("input[name=\"{}\"]", inputs_name))?;

    let mut insert_after: Element = table_name_input.clone().into();
    for column in &choice.columns {
        let input = dom_utils::create_hidden_input(&document, &inputs_name, column)?;
        insert_after = insert_after
            .insert_adjacent_element("afterend", &input)
            .ok()
            .flatten()
            .ok_or_else(|| format!("Failed to insert column input for `{}`", key.component))?;
    }

    // the fields now hold the choice; drop the draft and fold the preview
    registry::with_controller(&key.component, |c| c.clear_transient());
    preview::retract_preview(key)?;

    show_summary(&document, &key.component, &choice)
}

fn show_summary(
    document: &Document,
    component: &ComponentId,
    choice: &ConfirmedChoice,
) -> Result<(), String> {
    let table_line =
        dom_utils::require_html_element(document, &dom::selected_table_summary_id(component))?;
    table_line.set_hidden(false);
    table_line.set_inner_text(&choice.summary_table());

    let columns_line =
        dom_utils::require_html_element(document, &dom::selected_columns_summary_id(component))?;
    columns_line.set_hidden(false);
    columns_line.set_inner_text(&choice.summary_columns());
    Ok(())
}
