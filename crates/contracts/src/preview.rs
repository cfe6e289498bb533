use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::PreviewKey;

/// Параметры запроса серверного фрагмента превью таблицы.
/// Field order is the wire order of the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePreviewRequest {
    pub table: String,
    pub context: String,
    pub component_id: String,
    pub table_transient_id: String,
}

impl TablePreviewRequest {
    pub fn new(table: impl Into<String>, context: impl Into<String>, key: &PreviewKey) -> Self {
        Self {
            table: table.into(),
            context: context.into(),
            component_id: key.component.as_str().to_string(),
            table_transient_id: key.transient.as_str().to_string(),
        }
    }
}

/// Карта "таблица -> колонки", встроенная в страницу рядом с выпадающим
/// списком таблиц. Drives the dependent column dropdowns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableColumnMap(HashMap<String, Vec<String>>);

impl TableColumnMap {
    pub fn parse(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse table column map: {e}"))
    }

    /// Columns of `table`, empty when the table is not in the map.
    pub fn columns_of(&self, table: &str) -> &[String] {
        self.0.get(table).map(Vec::as_slice).unwrap_or(&[])
    }
}
