//! Goals and their kinds

use crate::error::{QuestlogError, Result};
use std::fmt;
use std::str::FromStr;

/// Characters reserved by the goals file format
pub const RESERVED: &[char] = &[',', ':', '\n', '\r'];

/// Kind-specific goal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    /// Completed by a single event
    Simple { complete: bool },
    /// Never completes; every event awards points
    Eternal,
    /// Completed after `target` events, with a one-time bonus
    Checklist { completed: u32, target: u32, bonus: i32 },
}

impl GoalKind {
    pub fn tag(&self) -> &'static str {
        match self {
            GoalKind::Simple { .. } => "SimpleGoal",
            GoalKind::Eternal => "EternalGoal",
            GoalKind::Checklist { .. } => "ChecklistGoal",
        }
    }
}

/// Goal kind as chosen on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalType {
    Simple,
    Eternal,
    Checklist,
}

impl FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" | "1" => Ok(GoalType::Simple),
            "eternal" | "2" => Ok(GoalType::Eternal),
            "checklist" | "3" => Ok(GoalType::Checklist),
            _ => Err(format!(
                "Invalid goal type: '{}'. Valid types are: simple, eternal, checklist",
                s
            )),
        }
    }
}

/// A goal that awards points each time an event is recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub name: String,
    pub description: String,
    pub points: i32,
    pub kind: GoalKind,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i32,
        kind: GoalKind,
    ) -> Self {
        Goal {
            name: name.into(),
            description: description.into(),
            points,
            kind,
        }
    }

    pub fn simple(name: impl Into<String>, description: impl Into<String>, points: i32) -> Self {
        Self::new(name, description, points, GoalKind::Simple { complete: false })
    }

    pub fn eternal(name: impl Into<String>, description: impl Into<String>, points: i32) -> Self {
        Self::new(name, description, points, GoalKind::Eternal)
    }

    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i32,
        target: u32,
        bonus: i32,
    ) -> Self {
        Self::new(
            name,
            description,
            points,
            GoalKind::Checklist {
                completed: 0,
                target,
                bonus,
            },
        )
    }

    /// Reject names and descriptions that would not survive a save
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(QuestlogError::InvalidInput(
                "Goal name cannot be empty".to_string(),
            ));
        }
        for (field, value) in [("name", &self.name), ("description", &self.description)] {
            if value.contains(RESERVED) {
                return Err(QuestlogError::InvalidInput(format!(
                    "Goal {} cannot contain ',' ':' or line breaks: '{}'",
                    field, value
                )));
            }
        }
        if let GoalKind::Checklist { target: 0, .. } = self.kind {
            return Err(QuestlogError::InvalidInput(
                "Checklist target must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        match self.kind {
            GoalKind::Simple { complete } => complete,
            GoalKind::Eternal => false,
            GoalKind::Checklist {
                completed, target, ..
            } => completed >= target,
        }
    }

    /// Apply one event to the goal's own state.
    ///
    /// Returns the bonus earned when this event completes a checklist.
    pub fn record_event(&mut self) -> Result<Option<i32>> {
        if self.is_complete() {
            return Err(QuestlogError::InvalidInput(format!(
                "Goal '{}' is already complete",
                self.name
            )));
        }

        match &mut self.kind {
            GoalKind::Simple { complete } => {
                *complete = true;
                Ok(None)
            }
            GoalKind::Eternal => Ok(None),
            GoalKind::Checklist {
                completed,
                target,
                bonus,
            } => {
                *completed += 1;
                Ok((*completed >= *target).then_some(*bonus))
            }
        }
    }

    /// Human-readable summary shown in goal listings
    pub fn details(&self) -> String {
        match self.kind {
            GoalKind::Checklist {
                completed, target, ..
            } => format!(
                "{} ({}) -- Completed {}/{} times",
                self.name, self.description, completed, target
            ),
            _ => format!("{} ({})", self.name, self.description),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_complete() { "[X]" } else { "[ ]" };
        write!(f, "{} {}", mark, self.details())
    }
}
