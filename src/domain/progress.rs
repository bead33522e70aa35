//! Score and daily streak for a set of goals

use crate::domain::{Goal, Store};
use crate::error::{QuestlogError, Result};
use chrono::NaiveDate;

/// Scalar state kept alongside the goals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub score: i64,
    pub streak: u32,
    pub last_recorded: Option<NaiveDate>,
}

impl Progress {
    /// Advance the daily streak for an event recorded on `today`
    pub fn touch(&mut self, today: NaiveDate) {
        self.streak = match self.last_recorded {
            None => 1,
            Some(last) if last == today => self.streak.max(1),
            Some(last) if last.succ_opt() == Some(today) => self.streak.saturating_add(1),
            Some(last) if last < today => 1,
            // Last event is dated in the future; leave the streak alone
            Some(_) => self.streak.max(1),
        };
        if self.last_recorded.map_or(true, |last| last < today) {
            self.last_recorded = Some(today);
        }
    }
}

/// Points awarded for one recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub points: i32,
    pub bonus: Option<i32>,
    pub streak: u32,
    pub score: i64,
}

/// Goals plus the player's progress, persisted together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalBook {
    pub progress: Progress,
    pub goals: Store<Goal>,
}

impl GoalBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, goal: Goal) -> Result<()> {
        goal.validate()?;
        self.goals.add(goal);
        Ok(())
    }

    /// Record an event for the goal at 1-based position `number`
    pub fn record_event(&mut self, number: usize, today: NaiveDate) -> Result<Award> {
        let goal = number
            .checked_sub(1)
            .and_then(|index| self.goals.get_mut(index))
            .ok_or_else(|| {
                QuestlogError::InvalidInput(format!("Invalid goal number: {}", number))
            })?;

        let bonus = goal.record_event()?;
        let points = goal.points;

        self.progress.touch(today);
        self.progress.score = self
            .progress
            .score
            .saturating_add(i64::from(points) + i64::from(bonus.unwrap_or(0)));

        Ok(Award {
            points,
            bonus,
            streak: self.progress.streak,
            score: self.progress.score,
        })
    }
}
