//! Goal tracking use cases

use crate::domain::format::GoalCodec;
use crate::domain::{Award, Goal, GoalBook, GoalType};
use crate::error::{QuestlogError, Result};
use crate::infrastructure::{FileSystemRepository, FlatFile, LoadReport, QuestlogRepository};
use chrono::NaiveDate;
use tracing::info;

/// Input for a new goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub goal_type: GoalType,
    pub name: String,
    pub description: String,
    pub points: i32,
    /// Checklist only
    pub target: Option<u32>,
    /// Checklist only
    pub bonus: Option<i32>,
}

impl NewGoal {
    fn build(&self) -> Result<Goal> {
        let name = self.name.trim();
        let description = self.description.trim();
        let goal = match self.goal_type {
            GoalType::Simple => Goal::simple(name, description, self.points),
            GoalType::Eternal => Goal::eternal(name, description, self.points),
            GoalType::Checklist => {
                let target = self.target.ok_or_else(|| {
                    QuestlogError::InvalidInput(
                        "Checklist goals need --target".to_string(),
                    )
                })?;
                Goal::checklist(
                    name,
                    description,
                    self.points,
                    target,
                    self.bonus.unwrap_or(0),
                )
            }
        };
        Ok(goal)
    }
}

/// Service for creating goals and recording events
pub struct GoalService {
    repository: FileSystemRepository,
    file: Option<String>,
}

impl GoalService {
    /// `file` overrides the configured goals file
    pub fn new(repository: FileSystemRepository, file: Option<String>) -> Self {
        GoalService { repository, file }
    }

    fn goals_file(&self) -> Result<FlatFile<GoalCodec>> {
        let config = self.repository.load_config()?;
        Ok(self.repository.goals_file(&config, self.file.as_deref()))
    }

    fn load(&self, file: &FlatFile<GoalCodec>) -> Result<GoalBook> {
        let mut book = GoalBook::new();
        if let LoadReport::Failed(e) = file.load(&mut book) {
            return Err(e);
        }
        Ok(book)
    }

    /// Load goals and progress
    pub fn book(&self) -> Result<GoalBook> {
        let file = self.goals_file()?;
        self.load(&file)
    }

    /// Add a goal and save; returns its 1-based number
    pub fn create(&self, request: &NewGoal) -> Result<usize> {
        let goal = request.build()?;
        let file = self.goals_file()?;
        let mut book = self.load(&file)?;

        book.add(goal)?;
        file.save(&book).into_result()?;

        info!(goals = book.goals.len(), "goal created");
        Ok(book.goals.len())
    }

    /// Record an event for goal `number` on `today` and save
    pub fn record(&self, number: usize, today: NaiveDate) -> Result<(Goal, Award)> {
        let file = self.goals_file()?;
        let mut book = self.load(&file)?;

        let award = book.record_event(number, today)?;
        file.save(&book).into_result()?;

        let goal = book
            .goals
            .get(number - 1)
            .cloned()
            .ok_or_else(|| QuestlogError::InvalidInput(format!("Invalid goal number: {}", number)))?;
        info!(number, score = award.score, streak = award.streak, "event recorded");
        Ok((goal, award))
    }
}
