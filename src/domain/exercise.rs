//! Routes and the exercise log

use crate::domain::format::FormatError;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

/// Activities offered when logging
pub const ACTIVITIES: &[&str] = &["Walking", "Running", "Cycling"];

const STEPS_PER_KM: f64 = 1312.0;
const KCAL_PER_KM: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
    Meters,
}

impl DistanceUnit {
    pub fn to_km(self, distance: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => distance,
            DistanceUnit::Miles => distance * 1.60934,
            DistanceUnit::Meters => distance / 1000.0,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" => Ok(DistanceUnit::Kilometers),
            "mi" => Ok(DistanceUnit::Miles),
            "m" => Ok(DistanceUnit::Meters),
            _ => Err(FormatError::invalid("unit", s)),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Meters => "m",
        };
        f.write_str(unit)
    }
}

/// A named route and the length of one trip
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub distance: f64,
    pub unit: DistanceUnit,
}

impl Route {
    pub fn new(name: impl Into<String>, distance: f64, unit: DistanceUnit) -> Self {
        Route {
            name: name.into(),
            distance,
            unit,
        }
    }
}

/// One logged exercise.
///
/// `distance` is in the route's unit; steps and calories are estimated
/// from the distance in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub timestamp: NaiveDateTime,
    pub activity: String,
    pub route: String,
    pub distance: f64,
    pub steps: u32,
    pub calories: u32,
    pub trips: u32,
}

impl ExerciseEntry {
    pub fn new(
        timestamp: NaiveDateTime,
        activity: impl Into<String>,
        route: &Route,
        trips: u32,
    ) -> Self {
        let distance = route.distance * f64::from(trips);
        let km = route.unit.to_km(distance);
        ExerciseEntry {
            timestamp,
            activity: activity.into(),
            route: route.name.clone(),
            distance,
            steps: (km * STEPS_PER_KM) as u32,
            calories: (km * KCAL_PER_KM) as u32,
            trips,
        }
    }
}

/// Steps and calories burned on `day`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyTotals {
    pub steps: u32,
    pub calories: u32,
}

impl DailyTotals {
    pub fn on<'a, I>(entries: I, day: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a ExerciseEntry>,
    {
        entries
            .into_iter()
            .filter(|entry| entry.timestamp.date() == day)
            .fold(DailyTotals::default(), |totals, entry| DailyTotals {
                steps: totals.steps.saturating_add(entry.steps),
                calories: totals.calories.saturating_add(entry.calories),
            })
    }
}
