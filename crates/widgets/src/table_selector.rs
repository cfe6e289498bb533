//! Table selector widget: confirm a previewed table into the form and
//! refill the dependent column dropdowns.

use contracts::dom;
use contracts::ids::{ComponentId, PreviewKey, TableTransientId};
use contracts::preview::TableColumnMap;
use wasm_bindgen::prelude::*;
use web_sys::HtmlOptionElement;

use crate::preview;
use crate::shared::{dom_utils, registry};

/// Commits the widget's pending table choice into its hidden input and
/// folds the preview.
#[wasm_bindgen(js_name = confirmTableChoice)]
pub fn confirm_table_choice(
    component_id: String,
    table_transient_id: String,
) -> Result<(), JsError> {
    let key = PreviewKey::new(
        ComponentId::new(component_id),
        TableTransientId::new(table_transient_id),
    );
    commit_table_choice(&key).map_err(|e| {
        log::error!("confirmTableChoice failed: {e}");
        JsError::new(&e)
    })
}

/// Refills the dependent column dropdowns after the table dropdown
/// changed, using the table/columns map embedded next to it. Wired to the
/// change handler of the table dropdown.
#[wasm_bindgen(js_name = updateColumnSelectors)]
pub fn update_column_selectors(
    table_selector_id: String,
    column_selector_ids: Vec<String>,
) -> Result<(), JsError> {
    refill_column_selectors(&table_selector_id, &column_selector_ids).map_err(|e| {
        log::error!("updateColumnSelectors failed: {e}");
        JsError::new(&e)
    })
}

fn commit_table_choice(key: &PreviewKey) -> Result<(), String> {
    let document = dom_utils::document()?;

    let choice = registry::with_controller(&key.component, |c| c.confirmed_snapshot())
        .map_err(|e| e.to_string())?;

    let table_input = dom_utils::require_input(&document, &dom::table_input_id(&key.component))?;
    table_input.set_value(&choice.table);

    registry::with_controller(&key.component, |c| c.clear_transient());
    preview::retract_preview(key)
}

fn refill_column_selectors(
    table_selector_id: &str,
    column_selector_ids: &[String],
) -> Result<(), String> {
    let document = dom_utils::document()?;

    let map_holder =
        dom_utils::require_element(&document, &dom::table_column_map_id(table_selector_id))?;
    let map = TableColumnMap::parse(&map_holder.text_content().unwrap_or_default())?;

    let table_selector = dom_utils::require_select(&document, table_selector_id)?;
    // a table missing from the map leaves the dropdowns with just the
    // placeholder row
    let columns = map.columns_of(&table_selector.value());

    for id in column_selector_ids {
        let selector = dom_utils::require_select(&document, id)?;

        // keep only the placeholder row
        selector.options().set_length(1);
        for column in columns {
            let option = HtmlOptionElement::new_with_text_and_value(column, column)
                .map_err(|_| "Failed to create option element".to_string())?;
            selector
                .add_with_html_option_element(&option)
                .map_err(|_| format!("Failed to add option to `#{}`", id))?;
        }
        selector.set_hidden(false);
    }
    Ok(())
}
