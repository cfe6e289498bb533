//! Page-lifetime widget state.
//!
//! Every selector widget on the page owns one [`WidgetController`], looked
//! up by component id, so widgets never observe each other's state. All
//! access goes through [`with_controller`]; the cell is only borrowed for
//! the duration of the closure and never across an await point.

use std::cell::RefCell;
use std::collections::HashMap;

use contracts::ids::{ComponentId, TableTransientId};
use contracts::selection::{ConfirmedChoice, SelectionError, TransientChoice};

thread_local! {
    static REGISTRY: RefCell<HashMap<ComponentId, WidgetController>> =
        RefCell::new(HashMap::new());
    static CLONE_COUNTERS: RefCell<HashMap<String, u32>> = RefCell::new(HashMap::new());
}

/// State of one selector widget: the choice being made, which preview is
/// expanded, and the sequence of the latest preview fetch.
#[derive(Debug)]
pub struct WidgetController {
    component: ComponentId,
    transient: Option<TransientChoice>,
    shown: Option<TableTransientId>,
    fetch_seq: u64,
}

impl WidgetController {
    fn new(component: ComponentId) -> Self {
        Self {
            component,
            transient: None,
            shown: None,
            fetch_seq: 0,
        }
    }

    /// Registers a new preview fetch and returns its sequence token.
    /// Bumping the sequence invalidates every fetch of this widget that
    /// is still in flight.
    pub fn begin_show(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Whether `token` belongs to the latest fetch of this widget.
    pub fn token_is_current(&self, token: u64) -> bool {
        self.fetch_seq == token
    }

    /// Hands out the currently expanded preview, forgetting it. The
    /// caller is expected to retract that preview from the page.
    pub fn take_shown(&mut self) -> Option<TableTransientId> {
        self.shown.take()
    }

    /// Records that the preview for `transient` is now in the DOM and
    /// starts a fresh choice for `table`. An unconfirmed previous choice
    /// is dropped.
    pub fn apply_show(&mut self, table: &str, transient: TableTransientId) {
        self.transient = Some(TransientChoice::new(table));
        self.shown = Some(transient);
    }

    /// Flips a column in the in-progress choice; `Ok(true)` when the
    /// column is now selected.
    pub fn toggle_column(&mut self, name: &str) -> Result<bool, SelectionError> {
        match self.transient.as_mut() {
            Some(choice) => Ok(choice.toggle_column(name)),
            None => Err(SelectionError::NoTransientChoice(
                self.component.to_string(),
            )),
        }
    }

    /// Snapshot of the in-progress choice for committing into the form.
    /// The transient state stays put; it is cleared separately once the
    /// commit went through.
    pub fn confirmed_snapshot(&self) -> Result<ConfirmedChoice, SelectionError> {
        match self.transient.as_ref() {
            Some(choice) => Ok(choice.confirmed()),
            None => Err(SelectionError::NoTransientChoice(
                self.component.to_string(),
            )),
        }
    }

    pub fn clear_transient(&mut self) {
        self.transient = None;
    }

    /// Forgets the expanded preview, but only when it still is
    /// `transient`. A preview expanded after the caller looked is kept.
    pub fn clear_shown_if(&mut self, transient: &TableTransientId) {
        if self.shown.as_ref() == Some(transient) {
            self.shown = None;
        }
    }
}

/// Runs `f` with the controller of `component`, creating it on first use.
/// Never call this re-entrantly: the registry cell stays borrowed while
/// `f` runs.
pub fn with_controller<R>(
    component: &ComponentId,
    f: impl FnOnce(&mut WidgetController) -> R,
) -> R {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let controller = registry
            .entry(component.clone())
            .or_insert_with(|| WidgetController::new(component.clone()));
        f(controller)
    })
}

/// Next free index for a clone of the input group `group`. The counter
/// starts at `seed` (the number of inputs already on the page) and then
/// advances by one per clone, so ids stay unique no matter how the page
/// renders the originals.
pub fn next_clone_index(group: &str, seed: u32) -> u32 {
    CLONE_COUNTERS.with(|counters| {
        let mut counters = counters.borrow_mut();
        let counter = counters.entry(group.to_string()).or_insert(seed);
        let index = *counter;
        *counter += 1;
        index
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> WidgetController {
        WidgetController::new(ComponentId::new("comp1"))
    }

    #[test]
    fn test_show_starts_fresh_choice() {
        let mut c = controller();
        c.apply_show("users", TableTransientId::new("t1"));

        let snapshot = c.confirmed_snapshot().unwrap();
        assert_eq!(snapshot.table, "users");
        assert!(snapshot.columns.is_empty());
        assert_eq!(c.take_shown(), Some(TableTransientId::new("t1")));
        assert_eq!(c.take_shown(), None);
    }

    #[test]
    fn test_new_show_drops_abandoned_choice() {
        let mut c = controller();
        c.apply_show("users", TableTransientId::new("t1"));
        c.toggle_column("email").unwrap();

        c.apply_show("orders", TableTransientId::new("t2"));
        let snapshot = c.confirmed_snapshot().unwrap();
        assert_eq!(snapshot.table, "orders");
        assert!(snapshot.columns.is_empty());
        assert_eq!(c.take_shown(), Some(TableTransientId::new("t2")));
    }

    #[test]
    fn test_show_toggle_confirm_scenario() {
        let mut c = controller();
        c.apply_show("users", TableTransientId::new("t1"));
        assert!(c.toggle_column("email").unwrap());
        assert!(c.toggle_column("id").unwrap());

        let confirmed = c.confirmed_snapshot().unwrap();
        assert_eq!(confirmed.table, "users");
        assert_eq!(confirmed.columns, ["email", "id"]);
        assert_eq!(confirmed.summary_table(), "Selected table: users");
        assert_eq!(confirmed.summary_columns(), "Selected columns: email, id");

        c.clear_transient();
        assert!(c.confirmed_snapshot().is_err());
    }

    #[test]
    fn test_toggle_without_choice_is_error() {
        let mut c = controller();
        assert_eq!(
            c.toggle_column("email"),
            Err(SelectionError::NoTransientChoice("comp1".to_string()))
        );
    }

    #[test]
    fn test_confirm_twice_fails_without_new_show() {
        let mut c = controller();
        c.apply_show("users", TableTransientId::new("t1"));
        c.toggle_column("email").unwrap();

        assert!(c.confirmed_snapshot().is_ok());
        c.clear_transient();
        assert_eq!(
            c.confirmed_snapshot(),
            Err(SelectionError::NoTransientChoice("comp1".to_string()))
        );
    }

    #[test]
    fn test_only_latest_fetch_token_is_current() {
        let mut c = controller();
        let first = c.begin_show();
        let second = c.begin_show();

        assert!(!c.token_is_current(first));
        assert!(c.token_is_current(second));
    }

    #[test]
    fn test_clear_shown_if_ignores_other_previews() {
        let mut c = controller();
        c.apply_show("users", TableTransientId::new("t1"));

        c.clear_shown_if(&TableTransientId::new("t2"));
        assert_eq!(c.take_shown(), Some(TableTransientId::new("t1")));

        c.apply_show("users", TableTransientId::new("t3"));
        c.clear_shown_if(&TableTransientId::new("t3"));
        assert_eq!(c.take_shown(), None);
    }

    #[test]
    fn test_controllers_are_independent_per_component() {
        let first = ComponentId::new("comp1");
        let second = ComponentId::new("comp2");

        with_controller(&first, |c| c.apply_show("users", TableTransientId::new("t1")));
        with_controller(&second, |c| c.apply_show("orders", TableTransientId::new("t2")));
        with_controller(&first, |c| c.toggle_column("email").unwrap());

        let first_snapshot = with_controller(&first, |c| c.confirmed_snapshot()).unwrap();
        let second_snapshot = with_controller(&second, |c| c.confirmed_snapshot()).unwrap();
        assert_eq!(first_snapshot.table, "users");
        assert_eq!(first_snapshot.columns, ["email"]);
        assert_eq!(second_snapshot.table, "orders");
        assert!(second_snapshot.columns.is_empty());
    }

    #[test]
    fn test_clone_indexes_advance_per_group() {
        assert_eq!(next_clone_index("emails", 2), 2);
        assert_eq!(next_clone_index("emails", 2), 3);
        // seed only matters on first use of a group
        assert_eq!(next_clone_index("emails", 99), 4);
        assert_eq!(next_clone_index("phones", 1), 1);
    }
}
