//! Domain layer - Records, in-memory store and file formats

pub mod checkin;
pub mod entry;
pub mod exercise;
pub mod format;
pub mod goal;
pub mod meal;
pub mod menu;
pub mod metric;
pub mod mood;
pub mod profile;
pub mod progress;
pub mod store;

pub use checkin::CheckIn;
pub use entry::JournalEntry;
pub use exercise::{DailyTotals, DistanceUnit, ExerciseEntry, Route};
pub use goal::{Goal, GoalKind, GoalType};
pub use meal::{FoodItem, MealEntry};
pub use metric::MetricEntry;
pub use mood::MoodContext;
pub use profile::{Address, Profile};
pub use progress::{Award, GoalBook, Progress};
pub use store::Store;
