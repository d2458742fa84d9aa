use std::collections::HashSet;

/// Which task rows currently have their action menu expanded.
///
/// Rows are independent: any number may be open at once, and toggling one
/// never touches another. Menus for deleted tasks are pruned so the set
/// doesn't accumulate dead keys.
#[derive(Debug, Clone, Default)]
pub struct RowMenus {
    open: HashSet<String>,
}

impl RowMenus {
    pub fn new() -> Self {
        RowMenus::default()
    }

    /// Flip the menu for one task; self-inverse.
    pub fn toggle(&mut self, task_id: &str) {
        if !self.open.remove(task_id) {
            self.open.insert(task_id.to_string());
        }
    }

    /// Explicit close, used after any menu action fires so one click both
    /// performs the action and collapses the menu.
    pub fn collapse(&mut self, task_id: &str) {
        self.open.remove(task_id);
    }

    pub fn is_open(&self, task_id: &str) -> bool {
        self.open.contains(task_id)
    }

    /// Drop entries whose task no longer exists.
    pub fn prune<'a>(&mut self, live_ids: impl IntoIterator<Item = &'a str>) {
        let live: HashSet<&str> = live_ids.into_iter().collect();
        self.open.retain(|id| live.contains(id.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut rows = RowMenus::new();
        assert!(!rows.is_open("t-1"));
        rows.toggle("t-1");
        assert!(rows.is_open("t-1"));
        rows.toggle("t-1");
        assert!(!rows.is_open("t-1"));
    }

    #[test]
    fn rows_are_independent() {
        let mut rows = RowMenus::new();
        rows.toggle("t-1");
        rows.toggle("t-2");
        assert!(rows.is_open("t-1"));
        assert!(rows.is_open("t-2"));
        rows.toggle("t-1");
        assert!(!rows.is_open("t-1"));
        assert!(rows.is_open("t-2"));
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut rows = RowMenus::new();
        rows.toggle("t-1");
        rows.collapse("t-1");
        assert!(!rows.is_open("t-1"));
        rows.collapse("t-1");
        assert!(!rows.is_open("t-1"));
    }

    #[test]
    fn prune_drops_dead_keys() {
        let mut rows = RowMenus::new();
        rows.toggle("t-1");
        rows.toggle("t-2");
        rows.toggle("t-3");
        rows.prune(["t-1", "t-3"]);
        assert!(rows.is_open("t-1"));
        assert!(!rows.is_open("t-2"));
        assert!(rows.is_open("t-3"));
    }
}
