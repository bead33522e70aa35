//! Route and exercise log use cases

use crate::domain::exercise::ACTIVITIES;
use crate::domain::format::DelimitedRecord;
use crate::domain::menu::{require_choice, require_positive};
use crate::domain::{DailyTotals, DistanceUnit, ExerciseEntry, Route, Store};
use crate::error::{QuestlogError, Result};
use crate::infrastructure::{FileSystemRepository, LoadReport, QuestlogRepository};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

/// Input for a logged exercise
#[derive(Debug, Clone)]
pub struct NewExercise {
    /// Menu number (1-3) or activity name
    pub activity: String,
    /// 1-based route number
    pub route: usize,
    pub trips: u32,
}

/// Service for saved routes and the append-only exercise log
pub struct ExerciseService {
    repository: FileSystemRepository,
}

impl ExerciseService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ExerciseService { repository }
    }

    pub fn routes(&self) -> Result<Store<Route>> {
        let config = self.repository.load_config()?;
        let mut routes = Store::new();
        if let LoadReport::Failed(e) = self.repository.routes_file(&config).load(&mut routes) {
            return Err(e);
        }
        Ok(routes)
    }

    /// Add a route and save the whole list; returns its 1-based number
    pub fn add_route(&self, name: &str, distance: f64, unit: &str) -> Result<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(QuestlogError::InvalidInput(
                "Route name cannot be empty".to_string(),
            ));
        }
        let distance = require_positive("Distance", distance)?;
        let unit: DistanceUnit = unit.parse().map_err(|_| {
            QuestlogError::InvalidInput(format!("Invalid unit '{}'. Use km, mi or m", unit.trim()))
        })?;
        let route = Route::new(name, distance, unit);
        route.check_fields()?;

        let mut routes = self.routes()?;
        routes.add(route);
        let config = self.repository.load_config()?;
        self.repository
            .routes_file(&config)
            .save(&routes)
            .into_result()?;

        info!(routes = routes.len(), "route added");
        Ok(routes.len())
    }

    /// Append one exercise over a saved route, stamped with `now`
    pub fn log(&self, request: &NewExercise, now: NaiveDateTime) -> Result<ExerciseEntry> {
        let activity = require_choice("activity", ACTIVITIES, &request.activity)?;
        if request.trips == 0 {
            return Err(QuestlogError::InvalidInput(
                "Trips must be at least 1".to_string(),
            ));
        }

        let routes = self.routes()?;
        let route = request
            .route
            .checked_sub(1)
            .and_then(|i| routes.get(i))
            .ok_or_else(|| {
                QuestlogError::InvalidInput(format!("Invalid route number: {}", request.route))
            })?;
        let entry = ExerciseEntry::new(now, activity, route, request.trips);

        let config = self.repository.load_config()?;
        self.repository
            .exercise_file(&config)
            .append(&entry)
            .into_result()?;

        info!(steps = entry.steps, calories = entry.calories, "exercise logged");
        Ok(entry)
    }

    pub fn history(&self) -> Result<Store<ExerciseEntry>> {
        let config = self.repository.load_config()?;
        let mut store = Store::new();
        if let LoadReport::Failed(e) = self.repository.exercise_file(&config).load(&mut store) {
            return Err(e);
        }
        Ok(store)
    }

    pub fn totals_on(&self, day: NaiveDate) -> Result<DailyTotals> {
        Ok(DailyTotals::on(self.history()?.iter(), day))
    }
}
