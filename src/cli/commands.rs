//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "questlog")]
#[command(about = "Journal, goals, profile and mood check-ins in plain text files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Questlog directory (default: nearest parent containing .questlog)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Log loads, saves and skipped records to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new questlog directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Write or read journal entries
    #[command(subcommand)]
    Journal(JournalCommand),

    /// Create goals and record progress
    #[command(subcommand)]
    Goal(GoalCommand),

    /// View or edit the user profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Record a mood check-in, or show past check-ins
    Checkin(CheckinArgs),

    /// Log meals and manage the food list
    #[command(subcommand)]
    Meal(MealCommand),

    /// Log blood pressure and glucose readings
    #[command(subcommand)]
    Metric(MetricCommand),

    /// Log exercise over saved routes
    #[command(subcommand)]
    Exercise(ExerciseCommand),
}

#[derive(Subcommand, Debug)]
pub enum JournalCommand {
    /// Add an entry
    Write {
        /// Entry text
        #[arg(short, long)]
        entry: String,

        /// Mood (required for the first entry of a day)
        #[arg(short, long)]
        mood: Option<String>,

        /// Prompt the entry answers
        #[arg(short, long)]
        prompt: Option<String>,

        /// Journal file instead of the configured one
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Display all entries grouped by day
    Show {
        /// Journal file instead of the configured one
        #[arg(short, long)]
        file: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalCommand {
    /// Create a goal
    Create {
        /// Goal type (simple, eternal, checklist)
        #[arg(value_name = "TYPE")]
        goal_type: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Points awarded per event
        #[arg(short, long, allow_negative_numbers = true)]
        points: i32,

        /// Events needed to complete a checklist goal
        #[arg(short, long)]
        target: Option<u32>,

        /// Bonus awarded when a checklist goal completes
        #[arg(short, long, allow_negative_numbers = true)]
        bonus: Option<i32>,

        /// Goals file instead of the configured one
        #[arg(short, long)]
        file: Option<String>,
    },

    /// List goals with their numbers
    List {
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Record an event for a goal
    Record {
        /// Goal number as shown by 'goal list'
        number: usize,

        #[arg(short, long)]
        file: Option<String>,
    },

    /// Show score and streak
    Status {
        #[arg(short, long)]
        file: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Display the profile
    Show,

    /// Set a profile field
    Set {
        /// full_name, username, health_conditions, blood_type, allergies, medications, organ_donor
        key: String,
        value: String,
    },

    /// Add a saved address
    AddAddress(AddressArgs),
}

#[derive(Args, Debug)]
pub struct AddressArgs {
    #[arg(long)]
    pub street: String,
    #[arg(long)]
    pub city: String,
    #[arg(long, default_value = "")]
    pub state: String,
    #[arg(long, default_value = "")]
    pub zip: String,
    #[arg(long, default_value = "")]
    pub country: String,
    /// Home, Work, School, Other
    #[arg(long, default_value = "Home")]
    pub kind: String,
}

#[derive(Args, Debug)]
pub struct CheckinArgs {
    /// Mood: 1-5 or Awesome, Good, Fine, Bad, Terrible
    #[arg(short, long, required_unless_present = "history")]
    pub mood: Option<String>,

    /// Comma-separated emotions
    #[arg(short, long, value_delimiter = ',')]
    pub emotions: Vec<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(short, long)]
    pub note: Option<String>,

    /// Show past check-ins instead of recording one
    #[arg(long, conflicts_with = "mood")]
    pub history: bool,
}

#[derive(Subcommand, Debug)]
pub enum MealCommand {
    /// Add a food to the food list
    FoodAdd {
        name: String,

        /// Calories per serving
        #[arg(short, long)]
        calories: u32,

        /// Serving description, e.g. "1 cup"
        #[arg(short, long, default_value = "")]
        serving: String,
    },

    /// List foods with their numbers
    Foods,

    /// Log a meal
    Log {
        /// 1-5 or Breakfast, Lunch, Dinner, Morning Snack, Evening Snack
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        meal_type: String,

        /// Food number as shown by 'meal foods', or its name
        #[arg(short, long)]
        food: String,

        #[arg(short, long, default_value_t = 1.0)]
        servings: f64,
    },

    /// Show logged meals and today's calories
    History,
}

#[derive(Subcommand, Debug)]
pub enum MetricCommand {
    /// Log a reading
    Log {
        /// 1-2 or Pressure, Glucose
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Reading as measured, e.g. 120/80
        value: String,
    },

    /// Show logged readings
    History,
}

#[derive(Subcommand, Debug)]
pub enum ExerciseCommand {
    /// Save a route
    RouteAdd {
        name: String,

        /// Length of one trip
        #[arg(short, long)]
        distance: f64,

        /// km, mi or m
        #[arg(short, long, default_value = "km")]
        unit: String,
    },

    /// List routes with their numbers
    Routes,

    /// Log an exercise over a saved route
    Log {
        /// 1-3 or Walking, Running, Cycling
        #[arg(short, long)]
        activity: String,

        /// Route number as shown by 'exercise routes'
        #[arg(short, long)]
        route: usize,

        #[arg(short, long, default_value_t = 1)]
        trips: u32,
    },

    /// Show logged exercise and today's totals
    History,
}
