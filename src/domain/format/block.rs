//! Labeled block layout: `Label: value` lines grouped into records
//!
//! Records are delimited by a [`Boundary`]. A line that does not start with a
//! recognized label continues the last field of the current record, which is
//! how multi-line free text survives a save/load cycle.

use super::{Decoded, FormatError, Skipped};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for a candidate label line: `Name: rest`
fn label_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([A-Za-z][A-Za-z0-9 _-]*?)\s*:(.*)$").unwrap())
}

/// How records are delimited within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// A sentinel line opens every record
    Header(&'static str),
    /// The first label opens a record, a marker line closes it
    Trailer(&'static str),
    /// The whole file is a single record
    Whole,
}

/// Describes one labeled block file format
#[derive(Debug, Clone, Copy)]
pub struct BlockLayout {
    pub boundary: Boundary,
    /// Recognized labels, in the order they are written
    pub labels: &'static [&'static str],
    /// Written between label and value (`": "` or `":"`)
    pub separator: &'static str,
}

/// An ordered list of labeled values making up one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledBlock {
    fields: Vec<(&'static str, String)>,
}

impl LabeledBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`LabeledBlock::push`]
    pub fn with(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.push(label, value);
        self
    }

    pub fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.fields.push((label, value.into()));
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of a label; the last occurrence wins
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(l, _)| l.eq_ignore_ascii_case(label))
            .map(|(_, v)| v.as_str())
    }

    /// All values of a repeatable label, in file order
    pub fn get_all<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |(l, _)| l.eq_ignore_ascii_case(label))
            .map(|(_, v)| v.as_str())
    }

    pub fn get_or_empty(&self, label: &str) -> &str {
        self.get(label).unwrap_or("")
    }

    pub fn require(&self, label: &str) -> Result<&str, FormatError> {
        self.get(label)
            .ok_or_else(|| FormatError::MissingLabel(label.to_string()))
    }

    /// Append a continuation line to the most recent field
    fn continue_last(&mut self, line: &str) -> bool {
        match self.fields.last_mut() {
            Some((_, value)) => {
                if !value.is_empty() {
                    value.push('\n');
                }
                value.push_str(line);
                true
            }
            None => false,
        }
    }
}

/// A record that maps onto a [`LabeledBlock`]
pub trait BlockRecord: Sized {
    fn to_block(&self) -> LabeledBlock;
    fn from_block(block: &LabeledBlock) -> Result<Self, FormatError>;
}

/// A block read from text, with the line it started on
#[derive(Debug)]
pub struct ParsedBlock {
    pub line: usize,
    pub block: LabeledBlock,
}

/// Blocks found in a file plus the lines that belonged to none of them
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub blocks: Vec<ParsedBlock>,
    pub stray: Vec<Skipped>,
}

impl BlockLayout {
    /// Match a trimmed line against the recognized labels
    fn match_label<'a>(&self, line: &'a str) -> Option<(&'static str, &'a str)> {
        let caps = label_regex().captures(line)?;
        let name = caps.get(1)?.as_str();
        let label = self
            .labels
            .iter()
            .copied()
            .find(|l| l.eq_ignore_ascii_case(name))?;
        let value = caps.get(2).map_or("", |m| m.as_str()).trim();
        Some((label, value))
    }

    /// Whether a line would be read back as a boundary or a label
    pub fn is_reserved_line(&self, line: &str) -> bool {
        let line = line.trim();
        let is_boundary = match self.boundary {
            Boundary::Header(marker) | Boundary::Trailer(marker) => line == marker,
            Boundary::Whole => false,
        };
        is_boundary || self.match_label(line).is_some()
    }

    /// Split text into labeled blocks
    pub fn parse(&self, text: &str) -> ParseOutput {
        let mut out = ParseOutput::default();
        let mut current: Option<ParsedBlock> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match self.boundary {
                Boundary::Header(sentinel) if line == sentinel => {
                    out.blocks.extend(current.take());
                    current = Some(ParsedBlock {
                        line: line_no,
                        block: LabeledBlock::new(),
                    });
                    continue;
                }
                Boundary::Trailer(marker) if line == marker => {
                    match current.take() {
                        Some(parsed) => out.blocks.push(parsed),
                        None => out
                            .stray
                            .push(Skipped::new(line_no, "record terminator without a record")),
                    }
                    continue;
                }
                _ => {}
            }

            if let Some((label, value)) = self.match_label(line) {
                if current.is_none() {
                    if let Boundary::Header(_) = self.boundary {
                        out.stray.push(Skipped::new(
                            line_no,
                            format!("'{}' outside of a record", label),
                        ));
                        continue;
                    }
                    current = Some(ParsedBlock {
                        line: line_no,
                        block: LabeledBlock::new(),
                    });
                }
                if let Some(parsed) = current.as_mut() {
                    parsed.block.push(label, value);
                }
            } else {
                let continued = current
                    .as_mut()
                    .is_some_and(|parsed| parsed.block.continue_last(line));
                if !continued {
                    out.stray.push(Skipped::new(line_no, "unlabeled line"));
                }
            }
        }

        out.blocks.extend(current);
        out
    }

    /// Render one block, ending with a newline
    pub fn render(&self, block: &LabeledBlock) -> String {
        let mut out = String::new();

        if let Boundary::Header(sentinel) = self.boundary {
            out.push_str(sentinel);
            out.push('\n');
        }

        for (label, value) in block.fields() {
            let line = format!("{}{}{}", label, self.separator, value);
            out.push_str(line.trim_end());
            out.push('\n');
        }

        if let Boundary::Trailer(marker) = self.boundary {
            out.push_str(marker);
            out.push('\n');
        }

        out
    }

    /// Render a sequence of blocks as file contents
    pub fn render_all<'a, I>(&self, blocks: I) -> String
    where
        I: IntoIterator<Item = &'a LabeledBlock>,
    {
        let rendered: Vec<String> = blocks.into_iter().map(|b| self.render(b)).collect();
        match self.boundary {
            // Blank line between journal-style blocks
            Boundary::Header(_) => rendered.join("\n"),
            _ => rendered.concat(),
        }
    }

    /// Serialize one record as a text block
    pub fn serialize<R: BlockRecord>(&self, record: &R) -> String {
        self.render(&record.to_block())
    }

    /// Deserialize the first record found in a text block
    pub fn deserialize<R: BlockRecord>(&self, text: &str) -> Result<R, FormatError> {
        let parsed = self.parse(text);
        let first = parsed.blocks.into_iter().next().ok_or(FormatError::Empty)?;
        R::from_block(&first.block)
    }

    /// Decode every record in a file, skipping the ones that fail
    pub fn decode_all<R: BlockRecord>(&self, text: &str) -> Decoded<Vec<R>> {
        let ParseOutput { blocks, mut stray } = self.parse(text);
        let mut records = Vec::with_capacity(blocks.len());

        for parsed in blocks {
            match R::from_block(&parsed.block) {
                Ok(record) => records.push(record),
                Err(e) => stray.push(Skipped::new(parsed.line, e.to_string())),
            }
        }
        stray.sort_by_key(|s| s.line);

        Decoded {
            records: records.len(),
            value: records,
            skipped: stray,
        }
    }
}
