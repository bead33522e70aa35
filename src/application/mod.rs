//! Application layer - Use cases and orchestration

pub mod checkin;
pub mod exercise;
pub mod goals;
pub mod init;
pub mod journal;
pub mod manage_config;
pub mod meals;
pub mod metrics;
pub mod profile;

pub use checkin::{CheckInService, NewCheckIn};
pub use exercise::{ExerciseService, NewExercise};
pub use goals::{GoalService, NewGoal};
pub use journal::{JournalService, WriteEntry};
pub use manage_config::ConfigService;
pub use meals::{MealService, NewMeal};
pub use metrics::MetricService;
pub use profile::ProfileService;
