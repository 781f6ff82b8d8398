//! Bounded sliding-window buffers that feed the charts.

use std::collections::VecDeque;

use thiserror::Error;

/// Points kept per chart.
pub const SERIES_CAPACITY: usize = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("expected {expected} series values, got {got}")]
    SeriesArity { expected: usize, got: usize },
}

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    if dq.len() >= cap {
        dq.pop_front();
    }
    dq.push_back(v);
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One label sequence shared by one or more value series.
///
/// Labels and every series are evicted and appended together, so they always
/// have the same length and never exceed `capacity`.
#[derive(Debug, Clone)]
pub struct SeriesBuffer {
    labels: VecDeque<String>,
    series: Vec<VecDeque<f64>>,
    cap: usize,
}

impl SeriesBuffer {
    pub fn new(series_count: usize, cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            labels: VecDeque::with_capacity(cap),
            series: (0..series_count.max(1))
                .map(|_| VecDeque::with_capacity(cap))
                .collect(),
            cap,
        }
    }

    // Append one point per series under a shared label
    pub fn push(&mut self, label: impl Into<String>, values: &[f64]) -> Result<(), HistoryError> {
        if values.len() != self.series.len() {
            return Err(HistoryError::SeriesArity {
                expected: self.series.len(),
                got: values.len(),
            });
        }
        push_capped(&mut self.labels, label.into(), self.cap);
        for (dq, v) in self.series.iter_mut().zip(values) {
            push_capped(dq, *v, self.cap);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn labels(&self) -> Vec<String> {
        self.labels.iter().cloned().collect()
    }

    pub fn series(&self, idx: usize) -> Option<Vec<f64>> {
        self.series.get(idx).map(|dq| dq.iter().copied().collect())
    }

    pub fn all_series(&self) -> Vec<Vec<f64>> {
        self.series
            .iter()
            .map(|dq| dq.iter().copied().collect())
            .collect()
    }

    pub fn latest(&self, idx: usize) -> Option<f64> {
        self.series.get(idx).and_then(|dq| dq.back().copied())
    }

    pub fn points(&self, idx: usize) -> Vec<SeriesPoint> {
        let Some(dq) = self.series.get(idx) else {
            return Vec::new();
        };
        self.labels
            .iter()
            .zip(dq.iter())
            .map(|(label, value)| SeriesPoint {
                label: label.clone(),
                value: *value,
            })
            .collect()
    }
}
