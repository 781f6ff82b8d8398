//! Pipeline state: routes fetched snapshots into charts, tables and fields.

use std::collections::HashMap;

use tracing::debug;

use crate::charts::Charts;
use crate::render::{render_connections, render_hosts, render_metric_fields, render_system_info};
use crate::scheduler::Update;
use crate::sink::RenderSink;
use crate::types::{Snapshot, Source};
use crate::view::{Panel, ViewState};

#[derive(Debug, Default)]
pub struct Dashboard {
    charts: Charts,
    view: ViewState,
    // newest cycle rendered per source; older responses are dropped
    last_cycle: HashMap<Source, u64>,
}

impl Dashboard {
    pub fn new(charts: Charts) -> Self {
        Self {
            charts,
            ..Self::default()
        }
    }

    pub fn charts(&self) -> &Charts {
        &self.charts
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// User input only; the refresh path never calls this.
    pub fn select_panel(&mut self, panel: Panel) {
        self.view.select(panel);
    }

    pub fn last_cycle(&self, source: Source) -> Option<u64> {
        self.last_cycle.get(&source).copied()
    }

    /// Render one update. Returns false when it was older than what is
    /// already on screen for that source and got dropped.
    pub fn apply<S: RenderSink>(&mut self, update: Update, label: &str, sink: &mut S) -> bool {
        let source = update.source();
        let last = self.last_cycle.entry(source).or_insert(0);
        if update.cycle < *last {
            debug!(
                source = source.name(),
                cycle = update.cycle,
                newest = *last,
                "dropping out-of-order response"
            );
            return false;
        }
        *last = update.cycle;

        match update.snapshot {
            Snapshot::Metrics(samples) => {
                render_metric_fields(&samples, sink);
                self.charts.project(&samples, label, sink);
            }
            Snapshot::Connections(conns) => render_connections(&conns, sink),
            Snapshot::Hosts(hosts) => render_hosts(&hosts, sink),
            Snapshot::SystemInfo(info) => render_system_info(&info, sink),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartId;
    use crate::sink::recording::RecordingSink;
    use crate::sink::TableId;
    use crate::types::{HostRecord, MetricSample, SystemInfo};

    fn metrics(cycle: u64, cpu: f64) -> Update {
        Update {
            cycle,
            snapshot: Snapshot::Metrics(vec![MetricSample {
                name: "cpu.usage".into(),
                value: cpu,
            }]),
        }
    }

    fn hosts(cycle: u64, ip: &str) -> Update {
        Update {
            cycle,
            snapshot: Snapshot::Hosts(vec![HostRecord {
                ip: ip.into(),
                bytes: 1,
            }]),
        }
    }

    #[test]
    fn metrics_feed_fields_and_charts() {
        let mut d = Dashboard::default();
        let mut sink = RecordingSink::default();
        assert!(d.apply(metrics(1, 33.333), "t1", &mut sink));
        assert_eq!(sink.field("metric-cpu-usage"), Some("33.33"));
        assert_eq!(sink.charts[&ChartId::Cpu].1[0], vec![33.333]);
        assert_eq!(d.last_cycle(Source::Metrics), Some(1));
    }

    #[test]
    fn late_response_is_dropped() {
        let mut d = Dashboard::default();
        let mut sink = RecordingSink::default();
        assert!(d.apply(hosts(3, "newer"), "t", &mut sink));
        assert!(!d.apply(hosts(2, "older"), "t", &mut sink));
        assert_eq!(sink.tables[&TableId::Hosts][0][0], "newer");
    }

    #[test]
    fn sources_are_sequenced_independently() {
        let mut d = Dashboard::default();
        let mut sink = RecordingSink::default();
        assert!(d.apply(metrics(5, 1.0), "t5", &mut sink));
        // hosts from cycle 4 still render: only metrics has seen cycle 5
        assert!(d.apply(hosts(4, "h"), "t5", &mut sink));
        assert!(!d.apply(metrics(4, 2.0), "t5", &mut sink));
        assert_eq!(d.charts().buffer(ChartId::Cpu).len(), 1);
    }

    #[test]
    fn missing_source_leaves_others_fresh() {
        let mut d = Dashboard::default();
        let mut sink = RecordingSink::default();
        let info = |host: &str| SystemInfo {
            hostname: host.into(),
            platform: "Linux".into(),
            num_cpus: 4,
            uptime: 45.0,
        };
        // cycle 1: everything arrives
        d.apply(metrics(1, 10.0), "t1", &mut sink);
        d.apply(hosts(1, "h1"), "t1", &mut sink);
        d.apply(Update { cycle: 1, snapshot: Snapshot::SystemInfo(info("a")) }, "t1", &mut sink);
        // cycle 2: metrics failed, the rest still update
        d.apply(hosts(2, "h2"), "t2", &mut sink);
        d.apply(Update { cycle: 2, snapshot: Snapshot::SystemInfo(info("b")) }, "t2", &mut sink);

        assert_eq!(sink.field("metric-cpu-usage"), Some("10.00"));
        assert_eq!(sink.charts[&ChartId::Cpu].0, vec!["t1".to_string()]);
        assert_eq!(sink.tables[&TableId::Hosts][0][0], "h2");
        assert_eq!(sink.field("system-hostname"), Some("b"));
        assert_eq!(sink.field("system-uptime"), Some("45s"));
    }

    #[test]
    fn custom_window_size() {
        let mut d = Dashboard::new(Charts::new(3));
        let mut sink = RecordingSink::default();
        for cycle in 1..=5 {
            d.apply(metrics(cycle, cycle as f64), &format!("t{cycle}"), &mut sink);
        }
        let cpu = d.charts().buffer(ChartId::Cpu);
        assert_eq!(cpu.capacity(), 3);
        assert_eq!(cpu.series(0).unwrap(), vec![3.0, 4.0, 5.0]);
        assert_eq!(sink.charts[&ChartId::Cpu].0, vec!["t3", "t4", "t5"]);
    }

    #[test]
    fn refresh_never_touches_view() {
        let mut d = Dashboard::default();
        let mut sink = RecordingSink::default();
        d.select_panel(Panel::System);
        d.apply(metrics(1, 1.0), "t", &mut sink);
        d.apply(hosts(1, "h"), "t", &mut sink);
        assert_eq!(d.view().active(), Panel::System);
    }
}
