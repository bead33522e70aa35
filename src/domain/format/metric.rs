//! Body metric lines: `Timestamp,Kind,Value`

use super::{parse_timestamp, DelimitedRecord, FormatError, LineCodec};
use crate::domain::checkin::TIMESTAMP_FORMAT;
use crate::domain::metric::MetricEntry;

pub type MetricCodec = LineCodec<MetricEntry>;

impl DelimitedRecord for MetricEntry {
    const DELIMITER: char = ',';
    const LABELS: &'static [&'static str] = &["date", "type", "value"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.kind.clone(),
            self.value.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, FormatError> {
        let timestamp =
            parse_timestamp(fields[0]).ok_or_else(|| FormatError::invalid("date", fields[0]))?;
        Ok(MetricEntry::new(timestamp, fields[1], fields[2]))
    }
}
