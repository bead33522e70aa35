//! Mood check-in log format: labeled lines closed by `---`

use super::{
    parse_timestamp, split_list, AppendCodec, BlockLayout, BlockRecord, Boundary, Codec, Decoded, FormatError,
    LabeledBlock,
};
use crate::domain::checkin::TIMESTAMP_FORMAT;
use crate::domain::{CheckIn, Store};

pub const LAYOUT: BlockLayout = BlockLayout {
    boundary: Boundary::Trailer("---"),
    labels: &["Timestamp", "Mood", "Emotions", "Location", "Note"],
    separator: ": ",
};

impl BlockRecord for CheckIn {
    fn to_block(&self) -> LabeledBlock {
        LabeledBlock::new()
            .with("Timestamp", self.timestamp.format(TIMESTAMP_FORMAT).to_string())
            .with("Mood", self.mood.as_str())
            .with("Emotions", self.emotions.join(", "))
            .with("Location", self.location.as_str())
            .with("Note", self.note.as_str())
    }

    fn from_block(block: &LabeledBlock) -> Result<Self, FormatError> {
        let raw = block.require("Timestamp")?;
        let timestamp = parse_timestamp(raw).ok_or_else(|| FormatError::invalid("Timestamp", raw))?;

        Ok(CheckIn {
            timestamp,
            mood: block.require("Mood")?.to_string(),
            emotions: split_list(block.get_or_empty("Emotions"), ','),
            location: block.get_or_empty("Location").to_string(),
            note: block.get_or_empty("Note").to_string(),
        })
    }
}

/// Codec for the append-only check-in log
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckInCodec;

impl Codec for CheckInCodec {
    type Value = Store<CheckIn>;

    fn encode(&self, value: &Self::Value) -> String {
        let blocks: Vec<LabeledBlock> = value.iter().map(CheckIn::to_block).collect();
        LAYOUT.render_all(&blocks)
    }

    fn decode(&self, text: &str) -> Result<Decoded<Self::Value>, FormatError> {
        let decoded = LAYOUT.decode_all::<CheckIn>(text);
        Ok(Decoded {
            value: Store::from(decoded.value),
            records: decoded.records,
            skipped: decoded.skipped,
        })
    }

    fn count(&self, value: &Self::Value) -> usize {
        value.len()
    }
}

impl AppendCodec for CheckInCodec {
    type Record = CheckIn;

    fn encode_record(&self, record: &Self::Record) -> String {
        LAYOUT.serialize(record)
    }
}
