use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use moodjour::application::{init, month_calendar, AnalyticsScope, AnalyticsService, ConfigService};
use moodjour::cli::{format_calendar, format_report, format_streak_info, Cli, Commands};
use moodjour::domain::calendar::parse_month;
use moodjour::domain::DateReference;
use moodjour::error::Result;
use moodjour::infrastructure::{logging, FileSystemStore};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Resolve an optional date argument against the local date
fn resolve_date(input: Option<&str>, today: NaiveDate) -> Result<Option<NaiveDate>> {
    input
        .map(|raw| DateReference::parse(raw).map(|reference| reference.resolve(today)))
        .transpose()
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init { path }) => {
            init::init(&path)?;
            Ok(())
        }
        Some(Commands::Streak { as_of, json }) => {
            let as_of = resolve_date(as_of.as_deref(), today)?.unwrap_or(today);
            let store = FileSystemStore::discover()?;
            let service = AnalyticsService::new(store).with_today(as_of);

            let streak = service.get_streak_info()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&streak)?);
            } else {
                println!("{}", format_streak_info(&streak).trim_end());
            }
            Ok(())
        }
        Some(Commands::Stats {
            as_of,
            from,
            to,
            json,
        }) => {
            let as_of = resolve_date(as_of.as_deref(), today)?.unwrap_or(today);
            let scope = AnalyticsScope::new(
                resolve_date(from.as_deref(), today)?,
                resolve_date(to.as_deref(), today)?,
            )?;
            let store = FileSystemStore::discover()?;
            let service = AnalyticsService::new(store)
                .with_today(as_of)
                .with_scope(scope);

            let report = service.get_report()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", format_report(&report).trim_end());
            }
            Ok(())
        }
        Some(Commands::Calendar { month, as_of }) => {
            let as_of = resolve_date(as_of.as_deref(), today)?.unwrap_or(today);
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => (as_of.year(), as_of.month()),
            };
            let store = FileSystemStore::discover()?;
            let week_start = store.config().week_start;

            let grid = month_calendar(&store, year, month, as_of, week_start)?;
            println!("{}", format_calendar(&grid, week_start).trim_end());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let store = FileSystemStore::discover()?;
            let mut service = ConfigService::new(store);

            if list {
                let config = service.list();
                println!("entries = {}", config.entries);
                println!("moods = {}", config.moods);
                println!("tags = {}", config.tags);
                println!(
                    "week_start = {}",
                    format!("{:?}", config.week_start).to_lowercase()
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!("Valid keys: entries, moods, tags, week_start, created");
                Ok(())
            }
        }
        None => {
            println!("moodjour - Writing streaks and mood analytics for your journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
