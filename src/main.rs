//! Command-line front end for the reflection journal.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zen_journal::{
    filter, prompts, FileStore, KeyValueStore, RangeFilter, Reflection, ReflectionRepository,
    ReminderPreference, StreakTracker,
};

#[derive(Parser)]
#[command(name = "zen-journal")]
#[command(version)]
#[command(about = "Reflection journal with streak tracking")]
struct Cli {
    /// Data directory override (defaults to the platform data dir)
    #[arg(long, env = "ZEN_JOURNAL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a new reflection and update the streak
    Write {
        /// Reflection text
        content: String,

        /// Mood on a 1 (difficult) to 5 (great) scale
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: Option<u8>,

        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List reflections, optionally filtered
    List {
        /// Case-insensitive text filter
        #[arg(long, default_value = "")]
        search: String,

        /// Date range: all, today, week or month
        #[arg(long, default_value = "all")]
        range: RangeFilter,
    },

    /// Delete a reflection by id
    Delete {
        /// Id of the reflection to delete
        id: String,
    },

    /// Show the current reflection streak
    Streak,

    /// Show today's writing prompt
    Prompt,

    /// Show or change the daily reminder time
    Remind {
        /// Reminder time as 24-hour HH:MM
        time: Option<String>,

        /// Turn the reminder off
        #[arg(long, conflicts_with = "time")]
        off: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("zen_journal=warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let store: Arc<dyn KeyValueStore> = match &cli.data_dir {
        Some(dir) => Arc::new(FileStore::open_at(dir)?),
        None => Arc::new(FileStore::open_default()?),
    };

    match cli.command {
        Commands::Write {
            content,
            mood,
            tags,
        } => {
            let repository = ReflectionRepository::new(store.clone());
            let streaks = StreakTracker::new(store);

            let reflection = Reflection::new(content, mood, tags);
            repository.save(&reflection).await?;
            let streak = streaks.record_activity().await?;

            println!("Saved reflection {}.", reflection.id);
            println!("Reflection streak: {}", day_count(streak));
        }
        Commands::List { search, range } => {
            let repository = ReflectionRepository::new(store);
            let reflections = repository.get_all().await;
            let filtered = filter::filter_reflections(&reflections, &search, range);

            if filtered.is_empty() {
                println!("No reflections found.");
            } else {
                let today = Local::now().date_naive();
                for reflection in &filtered {
                    print_reflection(reflection, today);
                }
            }
        }
        Commands::Delete { id } => {
            let repository = ReflectionRepository::new(store);
            repository.delete(&id).await?;
            println!("Deleted reflection {id}.");
        }
        Commands::Streak => {
            let streaks = StreakTracker::new(store);
            println!(
                "Reflection streak: {}",
                day_count(streaks.current_streak().await)
            );
        }
        Commands::Prompt => {
            println!("{}", prompts::daily_prompt(Local::now().date_naive()));
        }
        Commands::Remind { time, off } => {
            let reminder = ReminderPreference::new(store);
            if off {
                reminder.clear().await?;
                println!("Reminder turned off.");
            } else if let Some(time) = time {
                reminder.set(&time).await?;
                println!("Daily reminder set for {time}.");
            } else {
                match reminder.get().await {
                    Some(time) => println!("Daily reminder: {time}"),
                    None => println!("No reminder set."),
                }
            }
        }
    }

    Ok(())
}

fn day_count(streak: u32) -> String {
    format!("{} day{}", streak, if streak == 1 { "" } else { "s" })
}

fn print_reflection(reflection: &Reflection, today: NaiveDate) {
    let mut header = format!("[{}] {}", reflection.id, reflection.display_date(today));
    if let Some(time) = &reflection.time {
        header.push_str(&format!(", {time}"));
    }
    if let Some(label) = reflection.mood_label() {
        header.push_str(&format!(" (feeling {label})"));
    }
    println!("{header}");

    if let Some(tags) = &reflection.tags {
        println!("  Tags: {}", tags.join(", "));
    }
    for line in reflection.content.lines() {
        println!("  {line}");
    }
    println!();
}
