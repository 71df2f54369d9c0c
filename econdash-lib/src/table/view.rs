//! Header activation wiring for a rendered table.

use super::state::{SortChange, Table};

/// Handle returned by [`TableView::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type SortListener = Box<dyn FnMut(&SortChange, &Table) + Send>;

/// A mounted table together with the listeners interested in its sorting.
///
/// The view owns both; dropping the view tears every subscription down.
pub struct TableView {
    table: Table,
    listeners: Vec<(Subscription, SortListener)>,
    next_id: u64,
}

impl TableView {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Replace the table with freshly built data. Listeners stay subscribed.
    pub fn replace(&mut self, table: Table) {
        self.table = table;
    }

    /// Register a listener called after every header activation that sorted.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&SortChange, &Table) + Send + 'static,
    {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Activate a column header: sort, then notify listeners.
    ///
    /// No-op activations notify nobody.
    pub fn activate(&mut self, column_index: usize) -> Option<SortChange> {
        let change = self.table.sort_by(column_index)?;
        for (_, listener) in &mut self.listeners {
            listener(&change, &self.table);
        }
        Some(change)
    }
}

impl std::fmt::Debug for TableView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableView")
            .field("table", &self.table)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
