use std::fmt;

/// Идентификатор экземпляра виджета на странице, назначается серверной разметкой
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Идентификатор одного раскрытого превью таблицы внутри виджета
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableTransientId(String);

impl TableTransientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableTransientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typed address of one expanded preview: which widget and which of its
/// tables. Every DOM id that involves a preview is composed from this key
/// in [`crate::dom`]; nothing ever parses an id string back into parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewKey {
    pub component: ComponentId,
    pub transient: TableTransientId,
}

impl PreviewKey {
    pub fn new(component: ComponentId, transient: TableTransientId) -> Self {
        Self {
            component,
            transient,
        }
    }
}
