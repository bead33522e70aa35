use chrono::Local;
use clap::Parser;
use questlog::application::{
    init, CheckInService, ConfigService, ExerciseService, GoalService, JournalService,
    MealService, MetricService, NewCheckIn, NewExercise, NewGoal, NewMeal, ProfileService,
    WriteEntry,
};
use questlog::cli::commands::{
    CheckinArgs, ExerciseCommand, GoalCommand, JournalCommand, MealCommand, MetricCommand,
    ProfileCommand,
};
use questlog::cli::output;
use questlog::cli::{Cli, Commands};
use questlog::domain::entry::DATE_FORMAT;
use questlog::domain::{Address, GoalType};
use questlog::error::{QuestlogError, Result};
use questlog::infrastructure::FileSystemRepository;
use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = cli.root.as_deref();

    match cli.command {
        Some(Commands::Init { path }) => {
            let path = root.map(|r| r.join(&path)).unwrap_or(path);
            init::init(&path)?;
            println!("Initialized questlog at {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileSystemRepository::open(root)?);

            if list {
                print!("{}", output::format_config(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v.trim());
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: questlog config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: journal_file, goals_file, profile_file, checkin_file, foods_file, \
                     meals_file, metrics_file, routes_file, exercise_file, created"
                );
            }
            Ok(())
        }
        Some(Commands::Journal(command)) => {
            let service = JournalService::new(FileSystemRepository::open(root)?);
            run_journal(&service, command)
        }
        Some(Commands::Goal(command)) => run_goal(FileSystemRepository::open(root)?, command),
        Some(Commands::Profile(command)) => {
            let service = ProfileService::new(FileSystemRepository::open(root)?);
            run_profile(&service, command)
        }
        Some(Commands::Checkin(args)) => {
            let service = CheckInService::new(FileSystemRepository::open(root)?);
            run_checkin(&service, args)
        }
        Some(Commands::Meal(command)) => {
            let service = MealService::new(FileSystemRepository::open(root)?);
            run_meal(&service, command)
        }
        Some(Commands::Metric(command)) => {
            let service = MetricService::new(FileSystemRepository::open(root)?);
            run_metric(&service, command)
        }
        Some(Commands::Exercise(command)) => {
            let service = ExerciseService::new(FileSystemRepository::open(root)?);
            run_exercise(&service, command)
        }
        None => {
            println!("questlog - Journal, goals, profile, check-ins and health logs");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn run_journal(service: &JournalService, command: JournalCommand) -> Result<()> {
    match command {
        JournalCommand::Write {
            entry,
            mood,
            prompt,
            file,
        } => {
            let request = WriteEntry {
                text: entry,
                mood,
                prompt,
                file,
            };
            let written = service.write(&request, Local::now().naive_local())?;
            println!(
                "Entry saved for {} at {} (mood: {})",
                written.date.format(DATE_FORMAT),
                written.time,
                written.mood
            );
        }
        JournalCommand::Show { file } => {
            let entries = service.entries(file.as_deref())?;
            print!("{}", output::format_journal(entries.all()));
        }
    }
    Ok(())
}

fn run_goal(repo: FileSystemRepository, command: GoalCommand) -> Result<()> {
    match command {
        GoalCommand::Create {
            goal_type,
            name,
            description,
            points,
            target,
            bonus,
            file,
        } => {
            let goal_type = GoalType::from_str(&goal_type).map_err(QuestlogError::InvalidInput)?;
            let service = GoalService::new(repo, file);
            let number = service.create(&NewGoal {
                goal_type,
                name,
                description,
                points,
                target,
                bonus,
            })?;
            println!("Created goal {}", number);
        }
        GoalCommand::List { file } => {
            let book = GoalService::new(repo, file).book()?;
            print!("{}", output::format_goal_list(book.goals.all()));
        }
        GoalCommand::Record { number, file } => {
            let service = GoalService::new(repo, file);
            let (goal, award) = service.record(number, Local::now().date_naive())?;
            print!("{}", output::format_award(&goal, &award));
        }
        GoalCommand::Status { file } => {
            let book = GoalService::new(repo, file).book()?;
            print!("{}", output::format_status(&book));
        }
    }
    Ok(())
}

fn run_profile(service: &ProfileService, command: ProfileCommand) -> Result<()> {
    match command {
        ProfileCommand::Show => {
            print!("{}", output::format_profile(&service.show()?));
        }
        ProfileCommand::Set { key, value } => {
            service.set(&key, &value)?;
            println!("Set {}", key);
        }
        ProfileCommand::AddAddress(args) => {
            let address = Address {
                street: args.street.trim().to_string(),
                city: args.city.trim().to_string(),
                state: args.state.trim().to_string(),
                zip: args.zip.trim().to_string(),
                country: args.country.trim().to_string(),
                kind: args.kind.trim().to_string(),
            };
            let summary = address.full();
            let profile = service.add_address(address)?;
            println!("Added address {}: {}", profile.addresses.len(), summary);
        }
    }
    Ok(())
}

fn run_checkin(service: &CheckInService, args: CheckinArgs) -> Result<()> {
    if args.history {
        let history = service.history()?;
        print!("{}", output::format_checkins(history.all()));
        return Ok(());
    }

    let request = NewCheckIn {
        mood: args.mood.unwrap_or_default(),
        emotions: args.emotions,
        location: args.location,
        note: args.note,
    };
    let checkin = service.record(&request, Local::now().naive_local())?;
    println!("Checked in: {}", checkin.mood);
    Ok(())
}

fn run_meal(service: &MealService, command: MealCommand) -> Result<()> {
    match command {
        MealCommand::FoodAdd {
            name,
            calories,
            serving,
        } => {
            let number = service.add_food(&name, calories, &serving)?;
            println!("Added food {}: {}", number, name.trim());
        }
        MealCommand::Foods => {
            print!("{}", output::format_foods(service.foods()?.all()));
        }
        MealCommand::Log {
            meal_type,
            food,
            servings,
        } => {
            let request = NewMeal {
                meal_type,
                food,
                servings,
            };
            let meal = service.log(&request, Local::now().naive_local())?;
            println!(
                "Logged {}: {} x{} ({} kcal)",
                meal.meal_type, meal.food, meal.servings, meal.calories
            );
        }
        MealCommand::History => {
            let history = service.history()?;
            let calories = service.calories_on(Local::now().date_naive())?;
            print!("{}", output::format_meals(history.all(), calories));
        }
    }
    Ok(())
}

fn run_metric(service: &MetricService, command: MetricCommand) -> Result<()> {
    match command {
        MetricCommand::Log { kind, value } => {
            let entry = service.log(&kind, &value, Local::now().naive_local())?;
            println!("Logged {} reading: {}", entry.kind, entry.value);
        }
        MetricCommand::History => {
            print!("{}", output::format_metrics(service.history()?.all()));
        }
    }
    Ok(())
}

fn run_exercise(service: &ExerciseService, command: ExerciseCommand) -> Result<()> {
    match command {
        ExerciseCommand::RouteAdd {
            name,
            distance,
            unit,
        } => {
            let number = service.add_route(&name, distance, &unit)?;
            println!("Added route {}: {}", number, name.trim());
        }
        ExerciseCommand::Routes => {
            print!("{}", output::format_routes(service.routes()?.all()));
        }
        ExerciseCommand::Log {
            activity,
            route,
            trips,
        } => {
            let request = NewExercise {
                activity,
                route,
                trips,
            };
            let entry = service.log(&request, Local::now().naive_local())?;
            println!(
                "Logged {} on {}: {} steps, {} kcal",
                entry.activity, entry.route, entry.steps, entry.calories
            );
        }
        ExerciseCommand::History => {
            let history = service.history()?;
            let today = service.totals_on(Local::now().date_naive())?;
            print!("{}", output::format_exercises(history.all(), today));
        }
    }
    Ok(())
}
