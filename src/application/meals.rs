//! Food list and meal log use cases

use crate::domain::format::DelimitedRecord;
use crate::domain::meal::{calories_on, default_foods, MEAL_TYPES};
use crate::domain::menu::{require_choice, require_positive};
use crate::domain::{FoodItem, MealEntry, Store};
use crate::error::{QuestlogError, Result};
use crate::infrastructure::{FileSystemRepository, LoadReport, QuestlogRepository};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

/// Input for a logged meal
#[derive(Debug, Clone)]
pub struct NewMeal {
    /// Menu number (1-5) or meal type name
    pub meal_type: String,
    /// Food number from the food list, or the food's name
    pub food: String,
    pub servings: f64,
}

/// Service for the food list and the append-only meal log
pub struct MealService {
    repository: FileSystemRepository,
}

impl MealService {
    pub fn new(repository: FileSystemRepository) -> Self {
        MealService { repository }
    }

    /// Saved foods, or the built-in list when none have been saved
    pub fn foods(&self) -> Result<Store<FoodItem>> {
        let config = self.repository.load_config()?;
        let mut foods = Store::from(default_foods());
        if let LoadReport::Failed(e) = self.repository.foods_file(&config).load(&mut foods) {
            return Err(e);
        }
        Ok(foods)
    }

    /// Add a food and save the whole list; returns its 1-based number
    pub fn add_food(&self, name: &str, calories: u32, serving: &str) -> Result<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(QuestlogError::InvalidInput(
                "Food name cannot be empty".to_string(),
            ));
        }
        let serving = match serving.trim() {
            "" => "1 serving",
            s => s,
        };
        let food = FoodItem::new(name, calories, serving);
        food.check_fields()?;

        let mut foods = self.foods()?;
        foods.add(food);
        let config = self.repository.load_config()?;
        self.repository
            .foods_file(&config)
            .save(&foods)
            .into_result()?;

        info!(foods = foods.len(), "food added");
        Ok(foods.len())
    }

    /// Append one meal stamped with `now`
    pub fn log(&self, request: &NewMeal, now: NaiveDateTime) -> Result<MealEntry> {
        let meal_type = require_choice("meal type", MEAL_TYPES, &request.meal_type)?;
        let servings = require_positive("Servings", request.servings)?;

        let foods = self.foods()?;
        let food = select_food(foods.all(), &request.food)?;
        let meal = MealEntry::new(now, meal_type, food, servings);

        let config = self.repository.load_config()?;
        self.repository
            .meals_file(&config)
            .append(&meal)
            .into_result()?;

        info!(calories = meal.calories, "meal logged");
        Ok(meal)
    }

    pub fn history(&self) -> Result<Store<MealEntry>> {
        let config = self.repository.load_config()?;
        let mut store = Store::new();
        if let LoadReport::Failed(e) = self.repository.meals_file(&config).load(&mut store) {
            return Err(e);
        }
        Ok(store)
    }

    pub fn calories_on(&self, day: NaiveDate) -> Result<u32> {
        Ok(calories_on(self.history()?.iter(), day))
    }
}

fn select_food<'a>(foods: &'a [FoodItem], choice: &str) -> Result<&'a FoodItem> {
    let choice = choice.trim();
    let found = match choice.parse::<usize>() {
        Ok(n) => n.checked_sub(1).and_then(|i| foods.get(i)),
        Err(_) => foods.iter().find(|f| f.name.eq_ignore_ascii_case(choice)),
    };
    found.ok_or_else(|| QuestlogError::InvalidInput(format!("Invalid food number: {}", choice)))
}
