//! Registry of live charts for one view.

use std::collections::HashMap;

use log::debug;

use super::{ChartData, ERROR_TITLE};

/// Identifier of a chart slot, e.g. the canvas it is drawn on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartId(String);

impl ChartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChartId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A live chart and how many times it has been updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub data: ChartData,
    /// 0 when created, incremented on every in-place update.
    pub revision: u64,
}

/// Registry managing the charts of a single view.
///
/// Created when the view mounts and dropped with it. Updating an existing
/// chart replaces its labels, values and title in place; the entry itself
/// survives until [`remove`](ChartRegistry::remove).
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<ChartId, ChartEntry>,
}

impl ChartRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart, or update it in place if it already exists.
    ///
    /// Returns the chart's revision after the call.
    pub fn upsert(&mut self, id: impl Into<ChartId>, data: ChartData) -> u64 {
        let id = id.into();
        match self.charts.get_mut(&id) {
            Some(entry) => {
                entry.data = data;
                entry.revision += 1;
                debug!("Updated chart {} (revision {})", id, entry.revision);
                entry.revision
            }
            None => {
                debug!("Created chart {}", id);
                self.charts.insert(id, ChartEntry { data, revision: 0 });
                0
            }
        }
    }

    /// Empty every dataset of an existing chart and retitle it.
    ///
    /// Returns `false` if there is no such chart.
    pub fn clear(&mut self, id: &ChartId, title: &str) -> bool {
        let Some(entry) = self.charts.get_mut(id) else {
            return false;
        };
        let data = std::mem::replace(
            &mut entry.data,
            ChartData::new(String::new(), Vec::new(), Vec::new()),
        );
        entry.data = data.cleared(title);
        entry.revision += 1;
        true
    }

    /// Show the load-failure placeholder, creating the chart from `template`
    /// if it does not exist yet.
    pub fn fail(&mut self, id: impl Into<ChartId>, template: ChartData) -> u64 {
        self.upsert(id, template.cleared(ERROR_TITLE))
    }

    pub fn get(&self, id: &ChartId) -> Option<&ChartEntry> {
        self.charts.get(id)
    }

    /// Destroy a chart.
    pub fn remove(&mut self, id: &ChartId) -> Option<ChartEntry> {
        self.charts.remove(id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Dataset, SELECT_TITLE};

    fn chart(title: &str, values: &[f64]) -> ChartData {
        ChartData::new(
            title,
            (0..values.len()).map(|i| (2020 + i).to_string()).collect(),
            vec![Dataset::new("Series", values.iter().copied().map(Some).collect())],
        )
    }

    #[test]
    fn test_upsert_updates_in_place() {
        let mut registry = ChartRegistry::new();
        assert_eq!(registry.upsert("laborChart", chart("A", &[1.0])), 0);
        assert_eq!(registry.upsert("laborChart", chart("B", &[2.0, 3.0])), 1);

        assert_eq!(registry.len(), 1);
        let entry = registry.get(&"laborChart".into()).unwrap();
        assert_eq!(entry.revision, 1);
        assert_eq!(entry.data.title, "B");
        assert_eq!(entry.data.datasets[0].data, vec![Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_clear_keeps_datasets() {
        let mut registry = ChartRegistry::new();
        registry.upsert("realEstateChart", chart("A", &[1.0, 2.0]));

        let id = ChartId::from("realEstateChart");
        assert!(registry.clear(&id, SELECT_TITLE));
        let entry = registry.get(&id).unwrap();
        assert_eq!(entry.data.title, SELECT_TITLE);
        assert!(entry.data.labels.is_empty());
        assert_eq!(entry.data.datasets.len(), 1);
        assert!(entry.data.datasets[0].data.is_empty());

        assert!(!registry.clear(&ChartId::from("missing"), SELECT_TITLE));
    }

    #[test]
    fn test_fail_and_remove() {
        let mut registry = ChartRegistry::new();
        registry.fail("inflationChart", chart("A", &[1.0]));
        let id = ChartId::from("inflationChart");
        assert_eq!(registry.get(&id).unwrap().data.title, ERROR_TITLE);

        assert!(registry.remove(&id).is_some());
        assert!(registry.is_empty());
    }
}
