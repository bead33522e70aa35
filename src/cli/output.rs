//! Output formatting utilities

use crate::domain::checkin::TIMESTAMP_FORMAT;
use crate::domain::entry::DATE_FORMAT;
use crate::domain::format::journal::SENTINEL;
use crate::domain::{
    Award, CheckIn, DailyTotals, ExerciseEntry, FoodItem, Goal, GoalBook, JournalEntry,
    MealEntry, MetricEntry, Profile, Route,
};
use crate::infrastructure::Config;

const DAY_SEPARATOR: &str = "-----------------------------------------------------";
const LOG_TIME: &str = "%Y-%m-%d %H:%M";

/// Format journal entries grouped by day.
///
/// Entries are sorted by date, then time of day. Each day gets one header
/// with its date and mood; the entries under it show time, prompt and text.
pub fn format_journal(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries to display. Write something first!".to_string();
    }

    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| (e.date, e.time_of_day()));

    let mut output = String::new();
    let mut current_day = None;
    for entry in sorted {
        if current_day != Some(entry.date) {
            if current_day.is_some() {
                output.push_str(DAY_SEPARATOR);
                output.push_str("\n\n");
            }
            output.push_str(&format!(
                "{}\nDate: {}\nMood: {}\n\n",
                SENTINEL,
                entry.date.format(DATE_FORMAT),
                entry.mood
            ));
            current_day = Some(entry.date);
        } else {
            output.push('\n');
        }

        output.push_str(&format!("Time: {}\n", entry.time));
        if !entry.prompt.is_empty() {
            output.push_str(&format!("Prompt: {}\n", entry.prompt));
        }
        output.push_str(&format!("Entry: {}\n", entry.text));
    }
    output.push_str(DAY_SEPARATOR);
    output.push('\n');
    output
}

/// Format goals as a numbered list
pub fn format_goal_list(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals yet".to_string();
    }

    let mut output = String::new();
    for (i, goal) in goals.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, goal));
    }
    output
}

/// Score, streak and goal counts
pub fn format_status(book: &GoalBook) -> String {
    let progress = &book.progress;
    let complete = book.goals.iter().filter(|g| g.is_complete()).count();
    let last = match progress.last_recorded {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => "never".to_string(),
    };
    format!(
        "Score: {}\nStreak: {} day(s)\nLast recorded: {}\nGoals: {} ({} complete)\n",
        progress.score,
        progress.streak,
        last,
        book.goals.len(),
        complete
    )
}

/// Result of recording an event
pub fn format_award(goal: &Goal, award: &Award) -> String {
    let mut output = format!("Recorded '{}': {:+} points\n", goal.name, award.points);
    if let Some(bonus) = award.bonus {
        output.push_str(&format!("Goal complete! Bonus: {:+} points\n", bonus));
    }
    output.push_str(&format!(
        "Score: {}  Streak: {} day(s)\n",
        award.score, award.streak
    ));
    output
}

pub fn format_profile(profile: &Profile) -> String {
    let list = |items: &[String]| {
        if items.is_empty() {
            "None".to_string()
        } else {
            items.join(", ")
        }
    };

    let mut output = format!(
        "Full name: {}\nUsername: {}\nHealth conditions: {}\nBlood type: {}\nAllergies: {}\nMedications: {}\nOrgan donor: {}\n",
        profile.full_name,
        profile.username,
        list(&profile.health_conditions),
        profile.blood_type,
        list(&profile.allergies),
        list(&profile.medications),
        if profile.organ_donor { "Yes" } else { "No" },
    );

    if profile.addresses.is_empty() {
        output.push_str("Addresses: None\n");
    } else {
        output.push_str("Addresses:\n");
        for (i, address) in profile.addresses.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, address.full()));
        }
    }
    output
}

/// Format past check-ins, oldest first
pub fn format_checkins(checkins: &[CheckIn]) -> String {
    if checkins.is_empty() {
        return "No check-ins yet".to_string();
    }

    let mut output = String::new();
    for checkin in checkins {
        output.push_str(&format!(
            "{}  {}",
            checkin.timestamp.format(TIMESTAMP_FORMAT),
            checkin.mood
        ));
        if !checkin.emotions.is_empty() {
            output.push_str(&format!(" ({})", checkin.emotions.join(", ")));
        }
        if !checkin.location.is_empty() {
            output.push_str(&format!(" @ {}", checkin.location));
        }
        output.push('\n');
        if !checkin.note.is_empty() {
            output.push_str(&format!("    {}\n", checkin.note));
        }
    }
    output
}

/// Numbered food list, as used by `meal log --food <N>`
pub fn format_foods(foods: &[FoodItem]) -> String {
    if foods.is_empty() {
        return "No foods yet. Add one with 'questlog meal food-add'".to_string();
    }
    foods
        .iter()
        .enumerate()
        .map(|(i, food)| {
            format!(
                "{}. {} ({} kcal per {})\n",
                i + 1,
                food.name,
                food.calories,
                food.serving
            )
        })
        .collect()
}

pub fn format_meals(meals: &[MealEntry], calories_today: u32) -> String {
    if meals.is_empty() {
        return "No meals logged yet".to_string();
    }

    let mut output = String::new();
    for meal in meals {
        output.push_str(&format!(
            "{}  {}: {} x{} ({} kcal)\n",
            meal.timestamp.format(LOG_TIME),
            meal.meal_type,
            meal.food,
            meal.servings,
            meal.calories
        ));
    }
    output.push_str(&format!("\nCalories today: {} kcal\n", calories_today));
    output
}

pub fn format_metrics(metrics: &[MetricEntry]) -> String {
    if metrics.is_empty() {
        return "No metrics logged yet".to_string();
    }
    metrics
        .iter()
        .map(|metric| {
            let reading = match metric.unit() {
                "" => metric.value.clone(),
                unit => format!("{} {}", metric.value, unit),
            };
            format!(
                "{}  {}: {}\n",
                metric.timestamp.format(LOG_TIME),
                metric.kind,
                reading
            )
        })
        .collect()
}

/// Numbered route list, as used by `exercise log --route <N>`
pub fn format_routes(routes: &[Route]) -> String {
    if routes.is_empty() {
        return "No routes yet. Add one with 'questlog exercise route-add'".to_string();
    }
    routes
        .iter()
        .enumerate()
        .map(|(i, route)| format!("{}. {} ({} {})\n", i + 1, route.name, route.distance, route.unit))
        .collect()
}

pub fn format_exercises(entries: &[ExerciseEntry], today: DailyTotals) -> String {
    if entries.is_empty() {
        return "No exercise logged yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {} {} x{}: {} steps, {} kcal\n",
            entry.timestamp.format(LOG_TIME),
            entry.activity,
            entry.route,
            entry.trips,
            entry.steps,
            entry.calories
        ));
    }
    output.push_str(&format!(
        "\nToday: {} steps, {} kcal burned\n",
        today.steps, today.calories
    ));
    output
}

pub fn format_config(config: &Config) -> String {
    let created = config.created.to_rfc3339();
    let pairs = [
        ("journal_file", config.journal_file.as_str()),
        ("goals_file", config.goals_file.as_str()),
        ("profile_file", config.profile_file.as_str()),
        ("checkin_file", config.checkin_file.as_str()),
        ("foods_file", config.foods_file.as_str()),
        ("meals_file", config.meals_file.as_str()),
        ("metrics_file", config.metrics_file.as_str()),
        ("routes_file", config.routes_file.as_str()),
        ("exercise_file", config.exercise_file.as_str()),
        ("created", created.as_str()),
    ];
    pairs
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}
