//! Массовое проставление радиокнопок approve/reject/pending.
//!
//! The controls are independent of the selector widgets and hold no
//! state; a pass just forces every matching per-row radio on the page to
//! one value.

use contracts::approvals::{ApprovalMode, VALUE_APPROVE, VALUE_PENDING, VALUE_REJECT};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::shared::dom_utils;

/// Отметить все радиокнопки "approve"
#[wasm_bindgen(js_name = approveAll)]
pub fn approve_all() -> Result<(), JsError> {
    check_radios_with_value(VALUE_APPROVE).map_err(|e| {
        log::error!("approveAll failed: {e}");
        JsError::new(&e)
    })
}

/// Отметить все радиокнопки "reject"
#[wasm_bindgen(js_name = rejectAll)]
pub fn reject_all() -> Result<(), JsError> {
    check_radios_with_value(VALUE_REJECT).map_err(|e| {
        log::error!("rejectAll failed: {e}");
        JsError::new(&e)
    })
}

/// Отметить все радиокнопки "pending"
#[wasm_bindgen(js_name = pendAll)]
pub fn pend_all() -> Result<(), JsError> {
    check_radios_with_value(VALUE_PENDING).map_err(|e| {
        log::error!("pendAll failed: {e}");
        JsError::new(&e)
    })
}

/// Runs the bulk pass for a mode-radio value. Wired to the change
/// handlers of the mode radio group, including manual selection, which
/// resets every row to pending before the user takes over.
#[wasm_bindgen(js_name = applyApprovalMode)]
pub fn apply_approval_mode(value: String) -> Result<(), JsError> {
    let Some(mode) = ApprovalMode::from_value(&value) else {
        let msg = format!("Unknown approval mode `{}`", value);
        log::error!("applyApprovalMode failed: {msg}");
        return Err(JsError::new(&msg));
    };
    check_radios_with_value(mode.forced_value()).map_err(|e| {
        log::error!("applyApprovalMode failed: {e}");
        JsError::new(&e)
    })
}

/// Checks every radio on the page carrying `value`. A page without
/// matching radios is a valid no-op.
fn check_radios_with_value(value: &str) -> Result<(), String> {
    let document = dom_utils::document()?;
    let selector = format!("input[type=\"radio\"][value=\"{}\"]", value);
    let radios = document
        .query_selector_all(&selector)
        .map_err(|_| format!("Invalid selector `{}`", selector))?;
    for i in 0..radios.length() {
        let Some(node) = radios.get(i) else { continue };
        let Ok(radio) = node.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        radio.set_checked(true);
    }
    Ok(())
}
