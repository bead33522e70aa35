//! Body metric readings

use chrono::NaiveDateTime;

/// Reading kinds that can be logged
pub const METRIC_KINDS: &[&str] = &["Pressure", "Glucose"];

/// One logged reading; the value is kept as typed, e.g. "120/80"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricEntry {
    pub timestamp: NaiveDateTime,
    pub kind: String,
    pub value: String,
}

impl MetricEntry {
    pub fn new(
        timestamp: NaiveDateTime,
        kind: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        MetricEntry {
            timestamp,
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Unit shown next to the value
    pub fn unit(&self) -> &'static str {
        match self.kind.as_str() {
            "Pressure" => "mmHg",
            "Glucose" => "mg/dL",
            _ => "",
        }
    }
}
