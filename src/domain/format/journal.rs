//! Journal file format
//!
//! ```text
//! === Journal Entry ===
//! Date: 17/01/2025
//! Time: 9:30 PM
//! Mood: Happy
//! Prompt: What made you smile today?
//! Entry: The first line of text
//! and any further lines
//!
//! === Journal Entry ===
//! ...
//! ```

use super::{BlockLayout, BlockRecord, Boundary, Codec, Decoded, FormatError, LabeledBlock};
use crate::domain::entry::{parse_date, DATE_FORMAT};
use crate::domain::{JournalEntry, Store};

/// Line that opens every journal entry
pub const SENTINEL: &str = "=== Journal Entry ===";

pub const LAYOUT: BlockLayout = BlockLayout {
    boundary: Boundary::Header(SENTINEL),
    labels: &["Date", "Time", "Mood", "Prompt", "Entry"],
    separator: ": ",
};

impl BlockRecord for JournalEntry {
    fn to_block(&self) -> LabeledBlock {
        LabeledBlock::new()
            .with("Date", self.date.format(DATE_FORMAT).to_string())
            .with("Time", self.time.as_str())
            .with("Mood", self.mood.as_str())
            .with("Prompt", self.prompt.as_str())
            .with("Entry", self.text.as_str())
    }

    fn from_block(block: &LabeledBlock) -> Result<Self, FormatError> {
        let raw_date = block.require("Date")?;
        let date = parse_date(raw_date).ok_or_else(|| FormatError::invalid("Date", raw_date))?;
        let text = block.require("Entry")?;

        Ok(JournalEntry {
            date,
            time: block.get_or_empty("Time").to_string(),
            mood: block.get_or_empty("Mood").to_string(),
            prompt: block.get_or_empty("Prompt").to_string(),
            text: text.to_string(),
        })
    }
}

/// Serialize one entry as a journal block
pub fn serialize(entry: &JournalEntry) -> String {
    LAYOUT.serialize(entry)
}

/// Deserialize the first journal block in `text`
pub fn deserialize(text: &str) -> Result<JournalEntry, FormatError> {
    LAYOUT.deserialize(text)
}

/// Codec for a whole journal file
#[derive(Debug, Clone, Copy, Default)]
pub struct JournalCodec;

impl Codec for JournalCodec {
    type Value = Store<JournalEntry>;

    fn encode(&self, value: &Self::Value) -> String {
        let blocks: Vec<LabeledBlock> = value.iter().map(JournalEntry::to_block).collect();
        LAYOUT.render_all(&blocks)
    }

    fn decode(&self, text: &str) -> Result<Decoded<Self::Value>, FormatError> {
        let decoded = LAYOUT.decode_all::<JournalEntry>(text);
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
