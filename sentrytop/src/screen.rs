//! Screen model: the fixed set of named slots the terminal UI draws from.

use std::collections::{BTreeSet, HashMap};

use crate::charts::ChartId;
use crate::format::metric_slot;
use crate::render::{SYSTEM_CPUS, SYSTEM_HOSTNAME, SYSTEM_PLATFORM, SYSTEM_UPTIME};
use crate::sink::{RenderSink, TableId};

/// Scalar metrics shown on the overview panel: (caption, metric name).
pub const OVERVIEW_METRICS: [(&str, &str); 6] = [
    ("CPU usage %", "cpu.usage"),
    ("Memory usage %", "memory.usage_percent"),
    ("Memory used", "memory.used"),
    ("Memory total", "memory.total"),
    ("Net in (B/s)", "network.bytes_in_per_sec"),
    ("Net out (B/s)", "network.bytes_out_per_sec"),
];

pub const SYSTEM_FIELDS: [(&str, &str); 4] = [
    ("Hostname", SYSTEM_HOSTNAME),
    ("Platform", SYSTEM_PLATFORM),
    ("CPUs", SYSTEM_CPUS),
    ("Uptime", SYSTEM_UPTIME),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

#[derive(Debug, Clone)]
pub struct Screen {
    slots: BTreeSet<String>,
    charts: HashMap<ChartId, ChartData>,
    tables: HashMap<TableId, Vec<Vec<String>>>,
    fields: HashMap<String, String>,
}

impl Screen {
    pub fn new() -> Self {
        let mut slots = BTreeSet::new();
        for (_, name) in OVERVIEW_METRICS {
            slots.insert(metric_slot(name));
        }
        for (_, slot) in SYSTEM_FIELDS {
            slots.insert(slot.to_string());
        }
        for id in ChartId::ALL {
            slots.insert(id.slot().to_string());
        }
        for t in [TableId::Connections, TableId::Hosts] {
            slots.insert(t.slot().to_string());
        }
        Self::with_slots(slots)
    }

    /// A screen exposing exactly these slot names.
    pub fn with_slots<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
            charts: HashMap::new(),
            tables: HashMap::new(),
            fields: HashMap::new(),
        }
    }

    pub fn chart(&self, id: ChartId) -> Option<&ChartData> {
        self.charts.get(&id)
    }

    pub fn rows(&self, table: TableId) -> &[Vec<String>] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn field(&self, slot: &str) -> Option<&str> {
        self.fields.get(slot).map(String::as_str)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for Screen {
    fn push_series(&mut self, chart: ChartId, labels: &[String], series: &[Vec<f64>]) {
        if !self.has_slot(chart.slot()) {
            return;
        }
        self.charts.insert(
            chart,
            ChartData {
                labels: labels.to_vec(),
                series: series.to_vec(),
            },
        );
    }

    fn replace_rows(&mut self, table: TableId, rows: Vec<Vec<String>>) {
        if !self.has_slot(table.slot()) {
            return;
        }
        self.tables.insert(table, rows);
    }

    fn set_field(&mut self, slot: &str, text: String) {
        if !self.has_slot(slot) {
            return;
        }
        self.fields.insert(slot.to_string(), text);
    }

    fn has_slot(&self, slot: &str) -> bool {
        self.slots.contains(slot)
    }
}
