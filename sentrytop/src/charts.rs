//! Chart definitions and the metrics-to-chart projection.

use chrono::{DateTime, Local};
use tracing::warn;

use crate::history::{SeriesBuffer, SERIES_CAPACITY};
use crate::sink::RenderSink;
use crate::types::MetricSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartId {
    Cpu,
    Memory,
    Network,
}

impl ChartId {
    pub const ALL: [ChartId; 3] = [ChartId::Cpu, ChartId::Memory, ChartId::Network];

    pub fn slot(self) -> &'static str {
        match self {
            ChartId::Cpu => "cpu-chart",
            ChartId::Memory => "memory-chart",
            ChartId::Network => "network-chart",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartId::Cpu => "CPU Usage %",
            ChartId::Memory => "Memory Usage %",
            ChartId::Network => "Network (bytes/s)",
        }
    }

    /// Metric names feeding this chart, one per series.
    pub fn metric_names(self) -> &'static [&'static str] {
        match self {
            ChartId::Cpu => &["cpu.usage"],
            ChartId::Memory => &["memory.usage_percent"],
            ChartId::Network => &["network.bytes_in_per_sec", "network.bytes_out_per_sec"],
        }
    }

    pub fn series_names(self) -> &'static [&'static str] {
        match self {
            ChartId::Cpu => &["CPU Usage %"],
            ChartId::Memory => &["Memory Usage %"],
            ChartId::Network => &["Bytes In", "Bytes Out"],
        }
    }

    // Fixed y ceiling for percentage charts; None means scale to the data
    pub fn y_max(self) -> Option<f64> {
        match self {
            ChartId::Cpu | ChartId::Memory => Some(100.0),
            ChartId::Network => None,
        }
    }
}

/// Value of the last sample with exactly this name, or 0 when absent.
pub fn sample_value(samples: &[MetricSample], name: &str) -> f64 {
    samples
        .iter()
        .rfind(|s| s.name == name)
        .map(|s| s.value)
        .unwrap_or(0.0)
}

/// Display label for a batch of samples: local render time, not server time.
pub fn render_label(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Per-chart sliding windows, each owned by exactly one chart.
#[derive(Debug, Clone)]
pub struct Charts {
    cpu: SeriesBuffer,
    memory: SeriesBuffer,
    network: SeriesBuffer,
}

impl Charts {
    pub fn new(cap: usize) -> Self {
        Self {
            cpu: SeriesBuffer::new(ChartId::Cpu.metric_names().len(), cap),
            memory: SeriesBuffer::new(ChartId::Memory.metric_names().len(), cap),
            network: SeriesBuffer::new(ChartId::Network.metric_names().len(), cap),
        }
    }

    pub fn buffer(&self, id: ChartId) -> &SeriesBuffer {
        match id {
            ChartId::Cpu => &self.cpu,
            ChartId::Memory => &self.memory,
            ChartId::Network => &self.network,
        }
    }

    fn buffer_mut(&mut self, id: ChartId) -> &mut SeriesBuffer {
        match id {
            ChartId::Cpu => &mut self.cpu,
            ChartId::Memory => &mut self.memory,
            ChartId::Network => &mut self.network,
        }
    }

    /// Append one point per chart from a metrics snapshot and push every chart to the sink.
    pub fn project<S: RenderSink>(&mut self, samples: &[MetricSample], label: &str, sink: &mut S) {
        for id in ChartId::ALL {
            let values: Vec<f64> = id
                .metric_names()
                .iter()
                .map(|name| sample_value(samples, name))
                .collect();
            let buf = self.buffer_mut(id);
            if let Err(e) = buf.push(label, &values) {
                warn!(chart = ?id, error = %e, "chart push rejected");
                continue;
            }
            if sink.has_slot(id.slot()) {
                sink.push_series(id, &buf.labels(), &buf.all_series());
            }
        }
    }
}

impl Default for Charts {
    fn default() -> Self {
        Self::new(SERIES_CAPACITY)
    }
}
