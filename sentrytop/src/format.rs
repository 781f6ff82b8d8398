//! Display formatters: byte magnitudes, uptimes, protocol numbers, metric values.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn protocol_name(protocol: i64) -> String {
    match protocol {
        1 => "ICMP".into(),
        6 => "TCP".into(),
        17 => "UDP".into(),
        other => other.to_string(),
    }
}

/// Base-1024 human size with two decimals, e.g. `1536` -> `"1.50 KB"`.
/// Anything past the TB range stays in TB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".into();
    }
    // floor(log1024(bytes)) without float rounding at exact powers
    let mut unit = 0usize;
    let mut rest = bytes;
    while rest >= 1024 && unit < UNITS.len() - 1 {
        rest /= 1024;
        unit += 1;
    }
    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    format!("{scaled:.2} {}", UNITS[unit])
}

/// `45` -> `"45s"`, `3665` -> `"1h 1m 5s"`, `90000` -> `"1d 1h 0m 0s"`.
pub fn format_uptime(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{days}d "));
    }
    if days > 0 || hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m "));
    }
    out.push_str(&format!("{secs}s"));
    out
}

pub fn format_metric_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Slot name for a scalar metric: `cpu.usage` -> `metric-cpu-usage`.
pub fn metric_slot(name: &str) -> String {
    format!("metric-{}", name.replace('.', "-"))
}
