//! Expanding and folding of table previews.
//!
//! A widget shows at most one expanded preview at a time. The server
//! renders the preview fragment on demand; this module fetches it,
//! injects it right after the widget's anchor element, keeps the trigger
//! button styling in step, and tracks the expansion in the widget's
//! controller. Entry points are exported to js and wired up as inline
//! handlers by the server-rendered markup.

use contracts::dom;
use contracts::ids::{ComponentId, PreviewKey, TableTransientId};
use contracts::preview::TablePreviewRequest;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::shared::{api, dom_utils, registry};

/// Fetches the preview of `table_name` and expands it under the widget's
/// anchor, folding whatever preview the widget had open before.
#[wasm_bindgen(js_name = showTable)]
pub async fn show_table(
    table_name: String,
    component_id: String,
    context: String,
    table_transient_id: String,
) -> Result<(), JsError> {
    let key = PreviewKey::new(
        ComponentId::new(component_id),
        TableTransientId::new(table_transient_id),
    );
    expand_preview(&table_name, &context, &key)
        .await
        .map_err(|e| {
            log::error!("showTable failed: {e}");
            JsError::new(&e)
        })
}

/// Folds the expanded preview of a widget. Does nothing when the preview
/// is already gone, so double invocation is safe.
#[wasm_bindgen(js_name = hideTable)]
pub fn hide_table(component_id: String, table_transient_id: String) -> Result<(), JsError> {
    let key = PreviewKey::new(
        ComponentId::new(component_id),
        TableTransientId::new(table_transient_id),
    );
    retract_preview(&key).map_err(|e| {
        log::error!("hideTable failed: {e}");
        JsError::new(&e)
    })
}

async fn expand_preview(table_name: &str, context: &str, key: &PreviewKey) -> Result<(), String> {
    let token = registry::with_controller(&key.component, |c| c.begin_show());

    let request = TablePreviewRequest::new(table_name, context, key);
    let markup = api::fetch_table_preview(&request).await?;

    // The fetch suspended; if a newer show for this widget started in the
    // meantime, this response is stale and must not touch the page.
    let current = registry::with_controller(&key.component, |c| c.token_is_current(token));
    if !current {
        log::debug!("Stale preview response for `{}` discarded", key.component);
        return Ok(());
    }

    // fold the preview this widget had open
    let previous = registry::with_controller(&key.component, |c| c.take_shown());
    if let Some(previous) = previous {
        retract_preview(&PreviewKey::new(key.component.clone(), previous))?;
    }

    let document = dom_utils::document()?;
    let anchor = dom_utils::require_element(&document, &dom::selector_anchor_id(&key.component))?;

    // a preview subtree the controller never learned about (markup
    // rendered it expanded) still counts as open
    retract_expanded_sibling(&anchor);

    anchor
        .insert_adjacent_html("afterend", &markup)
        .map_err(|_| format!("Failed to inject preview for `{}`", key.component))?;
    set_trigger_marked(&document, key, true)?;

    registry::with_controller(&key.component, |c| {
        c.apply_show(table_name, key.transient.clone())
    });
    Ok(())
}

/// Removes the expanded preview subtree of `key` from the page, unmarks
/// its trigger button and forgets the expansion. Idempotent.
pub(crate) fn retract_preview(key: &PreviewKey) -> Result<(), String> {
    let document = dom_utils::document()?;
    registry::with_controller(&key.component, |c| c.clear_shown_if(&key.transient));

    let Some(subtree) = document.get_element_by_id(&dom::expanded_preview_id(key)) else {
        return Ok(());
    };
    subtree.remove();
    set_trigger_marked(&document, key, false)
}

/// Removes a preview subtree sitting right after `anchor`, whichever
/// widget expansion produced it, and unmarks the trigger button that is
/// styled as selected.
fn retract_expanded_sibling(anchor: &Element) {
    let Some(sibling) = anchor.next_element_sibling() else {
        return;
    };
    let class_list = sibling.class_list();
    if !class_list.contains(dom::CLASS_FULL_TABLE) && !class_list.contains(dom::CLASS_RESULT_TABLE)
    {
        return;
    }
    sibling.remove();

    match anchor.query_selector(&format!("button.{}", dom::CLASS_TABLE_SELECT_BUTTON_SELECTED)) {
        Ok(Some(button)) => {
            dom_utils::set_class(&button, dom::CLASS_TABLE_SELECT_BUTTON_SELECTED, false)
        }
        _ => log::warn!(
            "Folded preview `#{}` had no selected trigger button",
            anchor.id()
        ),
    }
}

/// Styles the trigger button of `key` as selected or not. The button
/// lives inside the per-table container rendered by the widget shell.
fn set_trigger_marked(document: &Document, key: &PreviewKey, marked: bool) -> Result<(), String> {
    let container_id = dom::preview_button_container_id(key);
    let container = dom_utils::require_element(document, &container_id)?;
    let button = container
        .query_selector(&format!("button.{}", dom::CLASS_TABLE_SELECT_BUTTON))
        .ok()
        .flatten()
        .ok_or_else(|| format!("No trigger button inside `#{}`", container_id))?;
    dom_utils::set_class(&button, dom::CLASS_TABLE_SELECT_BUTTON_SELECTED, marked);
    Ok(())
}
