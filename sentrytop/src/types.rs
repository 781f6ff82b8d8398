//! Types that mirror the backend's JSON schema.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MetricSample {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MetricsResponse {
    #[serde(default)]
    pub metrics: Vec<MetricSample>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConnectionRecord {
    pub source: String,
    pub destination: String,
    pub protocol: i64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
}

// Ranked top-N by the backend; keep the order as received.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HostRecord {
    pub ip: String,
    pub bytes: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HostsResponse {
    #[serde(default)]
    pub hosts: Vec<HostRecord>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub num_cpus: u32,
    // seconds
    pub uptime: f64,
}

/// The four independently polled data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    Metrics,
    Connections,
    Hosts,
    SystemInfo,
}

impl Source {
    pub const ALL: [Source; 4] = [
        Source::Metrics,
        Source::Connections,
        Source::Hosts,
        Source::SystemInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Source::Metrics => "metrics",
            Source::Connections => "connections",
            Source::Hosts => "hosts",
            Source::SystemInfo => "system_info",
        }
    }
}

/// One successfully fetched snapshot, tagged by the source it came from.
#[derive(Debug, Clone)]
pub enum Snapshot {
    Metrics(Vec<MetricSample>),
    Connections(Vec<ConnectionRecord>),
    Hosts(Vec<HostRecord>),
    SystemInfo(SystemInfo),
}

impl Snapshot {
    pub fn source(&self) -> Source {
        match self {
            Snapshot::Metrics(_) => Source::Metrics,
            Snapshot::Connections(_) => Source::Connections,
            Snapshot::Hosts(_) => Source::Hosts,
            Snapshot::SystemInfo(_) => Source::SystemInfo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_payload_parses_and_keeps_order() {
        let js = r#"{"metrics":[{"name":"cpu.usage","value":12.5},{"name":"memory.usage_percent","value":40}]}"#;
        let r: MetricsResponse = serde_json::from_str(js).unwrap();
        assert_eq!(r.metrics.len(), 2);
        assert_eq!(r.metrics[0].name, "cpu.usage");
        assert_eq!(r.metrics[1].value, 40.0);
    }

    #[test]
    fn missing_arrays_default_to_empty() {
        let r: ConnectionsResponse = serde_json::from_str("{}").unwrap();
        assert!(r.connections.is_empty());
        let r: HostsResponse = serde_json::from_str(r#"{"extra":1}"#).unwrap();
        assert!(r.hosts.is_empty());
    }

    #[test]
    fn system_info_parses() {
        let js = r#"{"hostname":"edge-1","platform":"Linux","num_cpus":8,"uptime":3665.42}"#;
        let s: SystemInfo = serde_json::from_str(js).unwrap();
        assert_eq!(s.hostname, "edge-1");
        assert_eq!(s.num_cpus, 8);
    }

    #[test]
    fn connection_with_wrong_types_is_rejected() {
        let js = r#"{"connections":[{"source":"a","destination":"b","protocol":"tcp",
            "bytes_sent":1,"bytes_received":1,"packets_sent":1,"packets_received":1}]}"#;
        assert!(serde_json::from_str::<ConnectionsResponse>(js).is_err());
    }
}
