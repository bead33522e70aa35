//! Food list and meal log lines: `Name,Calories,Serving` and
//! `Timestamp,MealType,Food,Servings,Calories`

use super::delimited::parse_field;
use super::{parse_timestamp, DelimitedRecord, FormatError, LineCodec};
use crate::domain::checkin::TIMESTAMP_FORMAT;
use crate::domain::meal::{FoodItem, MealEntry};

pub type FoodCodec = LineCodec<FoodItem>;
pub type MealCodec = LineCodec<MealEntry>;

impl DelimitedRecord for FoodItem {
    const DELIMITER: char = ',';
    const LABELS: &'static [&'static str] = &["name", "calories", "serving"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.calories.to_string(),
            self.serving.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, FormatError> {
        if fields[0].is_empty() {
            return Err(FormatError::invalid("name", fields[0]));
        }
        Ok(FoodItem::new(
            fields[0],
            parse_field("calories", fields[1])?,
            fields[2],
        ))
    }
}

impl DelimitedRecord for MealEntry {
    const DELIMITER: char = ',';
    const LABELS: &'static [&'static str] = &["date", "meal type", "food", "servings", "calories"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.meal_type.clone(),
            self.food.clone(),
            self.servings.to_string(),
            self.calories.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, FormatError> {
        Ok(MealEntry {
            timestamp: parse_timestamp(fields[0])
                .ok_or_else(|| FormatError::invalid("date", fields[0]))?,
            meal_type: fields[1].to_string(),
            food: fields[2].to_string(),
            servings: parse_field("servings", fields[3])?,
            calories: parse_field("calories", fields[4])?,
        })
    }
}
