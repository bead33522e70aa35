//! Food list and meal log

use chrono::{NaiveDate, NaiveDateTime};

/// Meal types offered when logging
pub const MEAL_TYPES: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Morning Snack",
    "Evening Snack",
];

/// A food the user can log, with its calories per serving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    pub name: String,
    pub calories: u32,
    /// Free-form serving description, e.g. "1 cup"
    pub serving: String,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, calories: u32, serving: impl Into<String>) -> Self {
        FoodItem {
            name: name.into(),
            calories,
            serving: serving.into(),
        }
    }
}

/// Foods offered until the user saves a list of their own
pub fn default_foods() -> Vec<FoodItem> {
    vec![
        FoodItem::new("Chicken Breast", 165, "1 serving"),
        FoodItem::new("Brown Rice", 123, "1 serving"),
        FoodItem::new("Broccoli", 55, "1 serving"),
    ]
}

/// One logged meal
#[derive(Debug, Clone, PartialEq)]
pub struct MealEntry {
    pub timestamp: NaiveDateTime,
    pub meal_type: String,
    pub food: String,
    pub servings: f64,
    pub calories: u32,
}

impl MealEntry {
    /// Log `servings` of `food`; calories are truncated to whole kcal
    pub fn new(
        timestamp: NaiveDateTime,
        meal_type: impl Into<String>,
        food: &FoodItem,
        servings: f64,
    ) -> Self {
        MealEntry {
            timestamp,
            meal_type: meal_type.into(),
            food: food.name.clone(),
            servings,
            calories: (f64::from(food.calories) * servings) as u32,
        }
    }
}

/// Calories eaten on `day`
pub fn calories_on<'a, I>(meals: I, day: NaiveDate) -> u32
where
    I: IntoIterator<Item = &'a MealEntry>,
{
    meals
        .into_iter()
        .filter(|meal| meal.timestamp.date() == day)
        .fold(0, |total, meal| total.saturating_add(meal.calories))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_meal_calories_truncate() {
        let rice = FoodItem::new("Brown Rice", 123, "1 cup");
        let meal = MealEntry::new(at(1, 12), "Lunch", &rice, 1.5);
        assert_eq!(meal.food, "Brown Rice");
        assert_eq!(meal.calories, 184);
    }

    #[test]
    fn test_calories_on_counts_one_day() {
        let chicken = FoodItem::new("Chicken Breast", 165, "1 serving");
        let meals = vec![
            MealEntry::new(at(1, 8), "Breakfast", &chicken, 1.0),
            MealEntry::new(at(2, 8), "Breakfast", &chicken, 2.0),
            MealEntry::new(at(2, 19), "Dinner", &chicken, 1.0),
        ];
        assert_eq!(calories_on(&meals, at(2, 0).date()), 495);
        assert_eq!(calories_on(&meals, at(3, 0).date()), 0);
    }

    #[test]
    fn test_default_foods() {
        let names: Vec<String> = default_foods().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Chicken Breast", "Brown Rice", "Broccoli"]);
    }
}
