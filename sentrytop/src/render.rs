//! Snapshot-to-view projection for tables and text fields.
//!
//! Nothing here keeps state between snapshots: every call fully replaces what
//! it owns in the sink.

use crate::format::{format_bytes, format_metric_value, format_uptime, metric_slot, protocol_name};
use crate::sink::{RenderSink, TableId};
use crate::types::{ConnectionRecord, HostRecord, MetricSample, SystemInfo};

pub const SYSTEM_HOSTNAME: &str = "system-hostname";
pub const SYSTEM_PLATFORM: &str = "system-platform";
pub const SYSTEM_CPUS: &str = "system-cpus";
pub const SYSTEM_UPTIME: &str = "system-uptime";

pub fn connection_row(c: &ConnectionRecord) -> Vec<String> {
    vec![
        c.source.clone(),
        c.destination.clone(),
        protocol_name(c.protocol),
        format_bytes(c.bytes_sent.saturating_add(c.bytes_received)),
        c.packets_sent.saturating_add(c.packets_received).to_string(),
    ]
}

pub fn host_row(h: &HostRecord) -> Vec<String> {
    vec![h.ip.clone(), format_bytes(h.bytes)]
}

pub fn render_connections<S: RenderSink>(conns: &[ConnectionRecord], sink: &mut S) {
    replace_table(sink, TableId::Connections, conns.iter().map(connection_row).collect());
}

pub fn render_hosts<S: RenderSink>(hosts: &[HostRecord], sink: &mut S) {
    replace_table(sink, TableId::Hosts, hosts.iter().map(host_row).collect());
}

fn replace_table<S: RenderSink>(sink: &mut S, table: TableId, rows: Vec<Vec<String>>) {
    // panel not mounted
    if !sink.has_slot(table.slot()) {
        return;
    }
    sink.replace_rows(table, rows);
}

fn set_if_present<S: RenderSink>(sink: &mut S, slot: &str, text: String) {
    if sink.has_slot(slot) {
        sink.set_field(slot, text);
    }
}

pub fn render_system_info<S: RenderSink>(info: &SystemInfo, sink: &mut S) {
    set_if_present(sink, SYSTEM_HOSTNAME, info.hostname.clone());
    set_if_present(sink, SYSTEM_PLATFORM, info.platform.clone());
    set_if_present(sink, SYSTEM_CPUS, info.num_cpus.to_string());
    set_if_present(sink, SYSTEM_UPTIME, format_uptime(info.uptime));
}

pub fn render_metric_fields<S: RenderSink>(samples: &[MetricSample], sink: &mut S) {
    for s in samples {
        set_if_present(sink, &metric_slot(&s.name), format_metric_value(s.value));
    }
}
