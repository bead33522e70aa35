//! One record per line, fields joined by a single delimiter character

use super::{AppendCodec, Codec, Decoded, FormatError, Skipped};
use crate::domain::Store;
use crate::error::{QuestlogError, Result};
use std::marker::PhantomData;
use std::str::FromStr;

/// A record stored as a fixed list of delimited fields
pub trait DelimitedRecord: Sized {
    const DELIMITER: char;
    /// Field names, in file order
    const LABELS: &'static [&'static str];

    fn to_fields(&self) -> Vec<String>;

    /// Build a record from exactly `LABELS.len()` trimmed fields
    fn from_fields(fields: &[&str]) -> std::result::Result<Self, FormatError>;

    /// Reject field values that would not survive a reload
    fn check_fields(&self) -> Result<()> {
        let fields = self.to_fields();
        for (label, value) in Self::LABELS.iter().zip(&fields) {
            if value.contains([Self::DELIMITER, '\n', '\r']) {
                return Err(QuestlogError::InvalidInput(format!(
                    "'{}' cannot contain '{}' or line breaks",
                    label,
                    Self::DELIMITER
                )));
            }
        }
        Ok(())
    }
}

pub fn join_record<R: DelimitedRecord>(record: &R) -> String {
    record.to_fields().join(&R::DELIMITER.to_string())
}

pub fn split_record<R: DelimitedRecord>(line: &str) -> std::result::Result<R, FormatError> {
    let fields: Vec<&str> = line.trim().split(R::DELIMITER).map(str::trim).collect();
    if fields.len() != R::LABELS.len() {
        return Err(FormatError::FieldCount {
            expected: R::LABELS.len(),
            found: fields.len(),
        });
    }
    R::from_fields(&fields)
}

/// Parse one field, naming it in the error
pub(crate) fn parse_field<T: FromStr>(label: &str, value: &str) -> std::result::Result<T, FormatError> {
    value.trim().parse().map_err(|_| FormatError::invalid(label, value))
}

/// Codec for files holding one delimited record per line
pub struct LineCodec<R> {
    record: PhantomData<fn() -> R>,
}

impl<R> LineCodec<R> {
    pub const fn new() -> Self {
        LineCodec {
            record: PhantomData,
        }
    }
}

impl<R> Default for LineCodec<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for LineCodec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for LineCodec<R> {}

impl<R> std::fmt::Debug for LineCodec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineCodec").finish()
    }
}

impl<R: DelimitedRecord> Codec for LineCodec<R> {
    type Value = Store<R>;

    fn encode(&self, value: &Self::Value) -> String {
        value
            .iter()
            .map(|record| format!("{}\n", join_record(record)))
            .collect()
    }

    fn decode(&self, text: &str) -> std::result::Result<Decoded<Self::Value>, FormatError> {
        let mut store = Store::new();
        let mut skipped = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match split_record::<R>(line) {
                Ok(record) => store.add(record),
                Err(e) => skipped.push(Skipped::new(idx + 1, e.to_string())),
            }
        }

        Ok(Decoded {
            records: store.len(),
            value: store,
            skipped,
        })
    }

    fn count(&self, value: &Self::Value) -> usize {
        value.len()
    }
}

impl<R: DelimitedRecord> AppendCodec for LineCodec<R> {
    type Record = R;

    fn encode_record(&self, record: &Self::Record) -> String {
        format!("{}\n", join_record(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair {
        name: String,
        count: u32,
    }

    impl DelimitedRecord for Pair {
        const DELIMITER: char = ',';
        const LABELS: &'static [&'static str] = &["name", "count"];

        fn to_fields(&self) -> Vec<String> {
            vec![self.name.clone(), self.count.to_string()]
        }

        fn from_fields(fields: &[&str]) -> std::result::Result<Self, FormatError> {
            Ok(Pair {
                name: fields[0].to_string(),
                count: parse_field("count", fields[1])?,
            })
        }
    }

    fn pair(name: &str, count: u32) -> Pair {
        Pair {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_decode_skips_bad_lines() {
        let codec = LineCodec::<Pair>::new();
        let decoded = codec
            .decode("apple, 3\n\nbanana\npear,x\nplum,1\n")
            .unwrap();

        assert_eq!(decoded.value.all(), &[pair("apple", 3), pair("plum", 1)]);
        assert_eq!(decoded.records, 2);
        let lines: Vec<usize> = decoded.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 4]);
        assert_eq!(
            decoded.skipped[0].reason,
            "expected 2 fields, found 1".to_string()
        );
    }

    #[test]
    fn test_encode_one_line_per_record() {
        let codec = LineCodec::<Pair>::new();
        let store = Store::from(vec![pair("apple", 3), pair("plum", 1)]);
        assert_eq!(codec.encode(&store), "apple,3\nplum,1\n");
        assert_eq!(codec.encode_record(&pair("fig", 2)), "fig,2\n");
        assert_eq!(codec.encode(&Store::new()), "");
    }

    #[test]
    fn test_check_fields_rejects_delimiter() {
        assert!(pair("apple", 1).check_fields().is_ok());
        assert!(matches!(
            pair("a,b", 1).check_fields(),
            Err(QuestlogError::InvalidInput(_))
        ));
        assert!(pair("a\nb", 1).check_fields().is_err());
    }
}
