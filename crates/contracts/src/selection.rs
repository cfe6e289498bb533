use thiserror::Error;

/// Ошибки машины состояний выбора
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Toggling or confirming while the widget has no preview open, and
    /// confirming a second time in a row, both land here.
    #[error("component `{0}` has no table choice in progress")]
    NoTransientChoice(String),
}

/// Незафиксированный выбор одного виджета: таблица раскрытого превью и
/// отмеченные в нём колонки. Создаётся при показе превью, сбрасывается
/// при подтверждении или показе другого превью.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientChoice {
    table: String,
    columns: Vec<String>,
}

impl TransientChoice {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Columns in the order the user first picked them.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Flips membership of `name` and returns the new state: `true` when
    /// the column is now part of the choice. Removal keeps the order of
    /// the remaining columns.
    pub fn toggle_column(&mut self, name: &str) -> bool {
        if self.columns.iter().any(|c| c == name) {
            self.columns.retain(|c| c != name);
            false
        } else {
            self.columns.push(name.to_string());
            true
        }
    }

    /// Snapshot taken at confirmation time.
    pub fn confirmed(&self) -> ConfirmedChoice {
        ConfirmedChoice {
            table: self.table.clone(),
            columns: self.columns.clone(),
        }
    }
}

/// Выбор, зафиксированный в скрытых полях формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedChoice {
    pub table: String,
    pub columns: Vec<String>,
}

impl ConfirmedChoice {
    /// Summary line echoing the confirmed table.
    pub fn summary_table(&self) -> String {
        format!("Selected table: {}", self.table)
    }

    /// Summary line echoing the confirmed columns, comma-joined in pick
    /// order.
    pub fn summary_columns(&self) -> String {
        format!("Selected columns: {}", self.columns.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut choice = TransientChoice::new("users");
        assert!(choice.toggle_column("email"));
        assert_eq!(choice.columns(), ["email"]);
        assert!(!choice.toggle_column("email"));
        assert!(choice.columns().is_empty());
    }

    #[test]
    fn test_double_toggle_restores_previous_list() {
        let mut choice = TransientChoice::new("users");
        choice.toggle_column("email");
        choice.toggle_column("id");
        choice.toggle_column("name");
        let before = choice.columns().to_vec();

        choice.toggle_column("id");
        choice.toggle_column("id");
        assert_eq!(choice.columns(), ["email", "name", "id"]);

        assert_eq!(before, ["email", "id", "name"]);
    }

    #[test]
    fn test_columns_keep_pick_order() {
        let mut choice = TransientChoice::new("users");
        choice.toggle_column("c");
        choice.toggle_column("a");
        choice.toggle_column("b");
        assert_eq!(choice.columns(), ["c", "a", "b"]);
    }

    #[test]
    fn test_summary_lines() {
        let mut choice = TransientChoice::new("users");
        choice.toggle_column("email");
        choice.toggle_column("id");
        let confirmed = choice.confirmed();
        assert_eq!(confirmed.summary_table(), "Selected table: users");
        assert_eq!(confirmed.summary_columns(), "Selected columns: email, id");
    }

    #[test]
    fn test_confirmed_with_no_columns() {
        let confirmed = TransientChoice::new("users").confirmed();
        assert!(confirmed.columns.is_empty());
        assert_eq!(confirmed.summary_columns(), "Selected columns: ");
    }
}
