//! Goals file format
//!
//! Three header lines (score, streak, last recorded date) followed by one
//! type-tagged line per goal:
//!
//! ```text
//! 1250
//! 3
//! 2025-01-17
//! SimpleGoal:Marathon,Run a marathon,1000,false
//! EternalGoal:Scriptures,Read scriptures,100
//! ChecklistGoal:Temple,Attend the temple,50,500,10,3
//! ```

use super::{parse_bool, Codec, Decoded, FormatError, Skipped};
use crate::domain::{Goal, GoalBook, GoalKind, Progress, Store};
use chrono::{Datelike, NaiveDate};

const HEADER_LINES: usize = 3;
const NEVER: &str = "never";

/// Serialize one goal as a type-tagged line
pub fn serialize_goal(goal: &Goal) -> String {
    let common = format!("{},{},{}", goal.name, goal.description, goal.points);
    match goal.kind {
        GoalKind::Simple { complete } => format!("{}:{},{}", goal.kind.tag(), common, complete),
        GoalKind::Eternal => format!("{}:{}", goal.kind.tag(), common),
        GoalKind::Checklist {
            completed,
            target,
            bonus,
        } => format!(
            "{}:{},{},{},{}",
            goal.kind.tag(),
            common,
            bonus,
            target,
            completed
        ),
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, FormatError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormatError::invalid(field, value))
}

fn expect_fields(fields: &[&str], expected: usize) -> Result<(), FormatError> {
    if fields.len() != expected {
        return Err(FormatError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Deserialize a type-tagged goal line
pub fn deserialize_goal(line: &str) -> Result<Goal, FormatError> {
    let (tag, rest) = line
        .trim()
        .split_once(':')
        .ok_or_else(|| FormatError::MissingLabel("goal type".to_string()))?;
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();

    let kind = match tag.trim() {
        "SimpleGoal" => {
            expect_fields(&fields, 4)?;
            GoalKind::Simple {
                complete: parse_bool("complete", fields[3])?,
            }
        }
        "EternalGoal" => {
            expect_fields(&fields, 3)?;
            GoalKind::Eternal
        }
        "ChecklistGoal" => {
            expect_fields(&fields, 6)?;
            GoalKind::Checklist {
                bonus: parse_number("bonus", fields[3])?,
                target: parse_number("target", fields[4])?,
                completed: parse_number("completed", fields[5])?,
            }
        }
        other => return Err(FormatError::UnknownKind(other.to_string())),
    };

    Ok(Goal {
        name: fields[0].to_string(),
        description: fields[1].to_string(),
        points: parse_number("points", fields[2])?,
        kind,
    })
}

fn format_last_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| NEVER.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Parse the last-recorded header line.
///
/// Accepts ISO dates and month/day/year dates; year 1 stands for "never".
fn parse_last_date(value: &str) -> Result<Option<NaiveDate>, FormatError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(NEVER) {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|_| FormatError::invalid("last recorded", value))?;
    Ok((date.year() > 1).then_some(date))
}

/// Keep a parsed header value, or record why it was dropped
fn or_skip<T>(
    line: usize,
    result: Result<T, FormatError>,
    skipped: &mut Vec<Skipped>,
) -> Option<T> {
    result
        .map_err(|e| skipped.push(Skipped::new(line, e.to_string())))
        .ok()
}

/// Codec for the goals file
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalCodec;

impl Codec for GoalCodec {
    type Value = GoalBook;

    fn encode(&self, value: &Self::Value) -> String {
        let progress = &value.progress;
        let mut out = format!(
            "{}\n{}\n{}\n",
            progress.score,
            progress.streak,
            format_last_date(progress.last_recorded)
        );
        for goal in &value.goals {
            out.push_str(&serialize_goal(goal));
            out.push('\n');
        }
        out
    }

    fn decode(&self, text: &str) -> Result<Decoded<Self::Value>, FormatError> {
        if text.trim().is_empty() {
            return Ok(Decoded {
                value: GoalBook::default(),
                records: 0,
                skipped: Vec::new(),
            });
        }

        let lines: Vec<&str> = text.lines().collect();
        let mut skipped = Vec::new();
        if lines.len() < HEADER_LINES {
            skipped.push(Skipped::new(
                lines.len() + 1,
                FormatError::Truncated(lines.len()).to_string(),
            ));
        }

        // Missing or unreadable header values fall back to zero / never
        let header = |idx: usize| lines.get(idx).copied();
        let progress = Progress {
            score: header(0)
                .and_then(|l| or_skip(1, parse_number("score", l), &mut skipped))
                .unwrap_or(0),
            streak: header(1)
                .and_then(|l| or_skip(2, parse_number("streak", l), &mut skipped))
                .unwrap_or(0),
            last_recorded: header(2)
                .and_then(|l| or_skip(3, parse_last_date(l), &mut skipped))
                .flatten(),
        };

        let mut goals = Store::new();
        for (idx, line) in lines.iter().enumerate().skip(HEADER_LINES) {
            if line.trim().is_empty() {
                continue;
            }
            match deserialize_goal(line) {
                Ok(goal) => goals.add(goal),
                Err(e) => skipped.push(Skipped::new(idx + 1, e.to_string())),
            }
        }

        Ok(Decoded {
            records: goals.len(),
            value: GoalBook { progress, goals },
            skipped,
        })
    }

    fn count(&self, value: &Self::Value) -> usize {
        value.goals.len()
    }
}
