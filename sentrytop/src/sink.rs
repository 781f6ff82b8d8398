//! The narrow rendering interface the refresh pipeline writes into.

use crate::charts::ChartId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableId {
    Connections,
    Hosts,
}

impl TableId {
    pub fn slot(self) -> &'static str {
        match self {
            TableId::Connections => "connections-table-body",
            TableId::Hosts => "hosts-table-body",
        }
    }
}

/// Addressable output surface: charts, tables and text fields by slot name.
///
/// Implementations decide which slots exist; writers check `has_slot` and
/// skip silently when a target is missing.
pub trait RenderSink {
    /// Replace a chart's data (labels + one value vector per series) and redraw.
    fn push_series(&mut self, chart: ChartId, labels: &[String], series: &[Vec<f64>]);

    /// Replace every row of a table.
    fn replace_rows(&mut self, table: TableId, rows: Vec<Vec<String>>);

    fn set_field(&mut self, slot: &str, text: String);

    fn has_slot(&self, slot: &str) -> bool;
}

#[cfg(test)]
pub(crate) mod recording {
    use std::collections::{BTreeMap, BTreeSet};

    use super::{RenderSink, TableId};
    use crate::charts::ChartId;

    // Headless sink that remembers the last write per slot.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub(crate) missing: BTreeSet<String>,
        pub(crate) charts: BTreeMap<ChartId, (Vec<String>, Vec<Vec<f64>>)>,
        pub(crate) tables: BTreeMap<TableId, Vec<Vec<String>>>,
        pub(crate) fields: BTreeMap<String, String>,
        pub(crate) redraws: usize,
    }

    impl RecordingSink {
        pub(crate) fn without(slots: &[&str]) -> Self {
            Self {
                missing: slots.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        pub(crate) fn field(&self, slot: &str) -> Option<&str> {
            self.fields.get(slot).map(String::as_str)
        }
    }

    impl RenderSink for RecordingSink {
        fn push_series(&mut self, chart: ChartId, labels: &[String], series: &[Vec<f64>]) {
            self.charts.insert(chart, (labels.to_vec(), series.to_vec()));
            self.redraws += 1;
        }

        fn replace_rows(&mut self, table: TableId, rows: Vec<Vec<String>>) {
            self.tables.insert(table, rows);
        }

        fn set_field(&mut self, slot: &str, text: String) {
            self.fields.insert(slot.to_string(), text);
        }

        fn has_slot(&self, slot: &str) -> bool {
            !self.missing.contains(slot)
        }
    }
}
