use serde_json::json;

use crate::layout::LayoutReport;
use crate::logging::{LogEvent, LogFields, LogLevel};

/// Accumulated solver counters across the life of a gallery session.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    solves: u64,
    placed: u64,
    dropped: u64,
    malformed: u64,
    rows: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_solve(&mut self, report: &LayoutReport) {
        self.solves = self.solves.saturating_add(1);
        self.placed = self.placed.saturating_add(report.placements.len() as u64);
        self.dropped = self.dropped.saturating_add(report.dropped.len() as u64);
        self.malformed = self
            .malformed
            .saturating_add(report.malformed_count() as u64);
        self.rows = self.rows.saturating_add(u64::from(report.rows));
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            solves: self.solves,
            placed: self.placed,
            dropped: self.dropped,
            malformed: self.malformed,
            rows: self.rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub solves: u64,
    pub placed: u64,
    pub dropped: u64,
    pub malformed: u64,
    pub rows: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("solves".to_string(), json!(self.solves));
        map.insert("placed".to_string(), json!(self.placed));
        map.insert("dropped".to_string(), json!(self.dropped));
        map.insert("malformed".to_string(), json!(self.malformed));
        map.insert("rows".to_string(), json!(self.rows));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target,
            "layout_metrics",
            self.as_fields(),
        )
    }
}
