//! DOM naming scheme shared with the server-rendered markup.
//!
//! Every id the widgets look up is composed here from typed keys; the
//! server templates and the preview fragments must produce the same
//! names. Keeping the whole scheme in one module means a markup change
//! breaks one place instead of a string literal per call site.

use crate::ids::{ComponentId, PreviewKey};

/// Trigger button that expands a table preview.
pub const CLASS_TABLE_SELECT_BUTTON: &str = "table_select_button";

/// Marks the trigger button whose preview is currently expanded.
pub const CLASS_TABLE_SELECT_BUTTON_SELECTED: &str = "table_select_button_selected";

/// Root class of a column-selector preview fragment.
pub const CLASS_FULL_TABLE: &str = "table_select_full_table";

/// Root class of a table-selector preview fragment.
pub const CLASS_RESULT_TABLE: &str = "result_table";

/// Cell that belongs to the in-progress column choice.
pub const CLASS_SELECTED_COLUMN: &str = "col_sel_selected_column";

/// Cell of the column currently under the pointer.
pub const CLASS_HOVERED_COLUMN: &str = "col_sel_hovered_column";

/// Class carried by every cell of column `index` within a preview.
pub fn column_cell_class(index: u32) -> String {
    format!("col_{index}")
}

/// Widget anchor element; expanded previews are injected right after it.
pub fn selector_anchor_id(component: &ComponentId) -> String {
    format!("table_select_{component}")
}

/// Container of one table's trigger button inside a widget.
pub fn preview_button_container_id(key: &PreviewKey) -> String {
    format!(
        "table_select_{}_table_{}",
        key.component, key.transient
    )
}

/// Root element of an injected expanded preview.
pub fn expanded_preview_id(key: &PreviewKey) -> String {
    format!(
        "column_select_full_table_{}_table_{}",
        key.component, key.transient
    )
}

/// Hidden input that carries the confirmed table of a column selector.
pub fn table_name_input_id(component: &ComponentId) -> String {
    format!("input_{component}_table_name")
}

/// Hidden input that carries the confirmed table of a table selector.
pub fn table_input_id(component: &ComponentId) -> String {
    format!("input_{component}")
}

/// `name` attribute shared by the hidden column inputs of one widget.
pub fn column_inputs_name(component: &ComponentId) -> String {
    format!("{component}_columns")
}

/// Summary line that echoes the confirmed table.
pub fn selected_table_summary_id(component: &ComponentId) -> String {
    format!("col_sel_selected_table_{component}")
}

/// Summary line that echoes the confirmed columns.
pub fn selected_columns_summary_id(component: &ComponentId) -> String {
    format!("col_sel_selected_columns_{component}")
}

/// Element embedding the table/columns JSON map next to a table selector.
pub fn table_column_map_id(table_selector_id: &str) -> String {
    format!("{table_selector_id}_table_column_map")
}

/// Id of the `n`-th clone of a duplicating input group.
pub fn cloned_input_id(group: &str, n: u32) -> String {
    format!("{group}_{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TableTransientId;

    fn key() -> PreviewKey {
        PreviewKey::new(
            ComponentId::new("comp1"),
            TableTransientId::new("t1"),
        )
    }

    #[test]
    fn test_widget_ids() {
        let c = ComponentId::new("comp1");
        assert_eq!(selector_anchor_id(&c), "table_select_comp1");
        assert_eq!(table_name_input_id(&c), "input_comp1_table_name");
        assert_eq!(table_input_id(&c), "input_comp1");
        assert_eq!(column_inputs_name(&c), "comp1_columns");
        assert_eq!(selected_table_summary_id(&c), "col_sel_selected_table_comp1");
        assert_eq!(
            selected_columns_summary_id(&c),
            "col_sel_selected_columns_comp1"
        );
    }

    #[test]
    fn test_preview_ids() {
        assert_eq!(
            preview_button_container_id(&key()),
            "table_select_comp1_table_t1"
        );
        assert_eq!(
            expanded_preview_id(&key()),
            "column_select_full_table_comp1_table_t1"
        );
    }

    #[test]
    fn test_misc_names() {
        assert_eq!(column_cell_class(0), "col_0");
        assert_eq!(column_cell_class(12), "col_12");
        assert_eq!(
            table_column_map_id("table_selector_5"),
            "table_selector_5_table_column_map"
        );
        assert_eq!(cloned_input_id("emails", 3), "emails_3");
    }
}
