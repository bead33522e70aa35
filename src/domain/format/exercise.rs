//! Route and exercise log lines: `Name,Distance,Unit` and
//! `Timestamp,Activity,Route,Distance,Steps,Calories,Trips`

use super::delimited::parse_field;
use super::{parse_timestamp, DelimitedRecord, FormatError, LineCodec};
use crate::domain::checkin::TIMESTAMP_FORMAT;
use crate::domain::exercise::{ExerciseEntry, Route};

pub type RouteCodec = LineCodec<Route>;
pub type ExerciseCodec = LineCodec<ExerciseEntry>;

impl DelimitedRecord for Route {
    const DELIMITER: char = ',';
    const LABELS: &'static [&'static str] = &["name", "distance", "unit"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.distance.to_string(),
            self.unit.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, FormatError> {
        if fields[0].is_empty() {
            return Err(FormatError::invalid("name", fields[0]));
        }
        Ok(Route::new(
            fields[0],
            parse_field("distance", fields[1])?,
            fields[2].parse()?,
        ))
    }
}

impl DelimitedRecord for ExerciseEntry {
    const DELIMITER: char = ',';
    const LABELS: &'static [&'static str] = &[
        "date", "activity", "route", "distance", "steps", "calories", "trips",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.activity.clone(),
            self.route.clone(),
            self.distance.to_string(),
            self.steps.to_string(),
            self.calories.to_string(),
            self.trips.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, FormatError> {
        Ok(ExerciseEntry {
            timestamp: parse_timestamp(fields[0])
                .ok_or_else(|| FormatError::invalid("date", fields[0]))?,
            activity: fields[1].to_string(),
            route: fields[2].to_string(),
            distance: parse_field("distance", fields[3])?,
            steps: parse_field("steps", fields[4])?,
            calories: parse_field("calories", fields[5])?,
            trips: parse_field("trips", fields[6])?,
        })
    }
}
