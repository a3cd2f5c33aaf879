mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, ProfileAction};
use healthstore::core::logging::LogEntry;
use healthstore::models::config::Config;
use healthstore::output;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // HEALTHSTORE_LOG wins; otherwise the configured level.
    let filter = EnvFilter::try_from_env("HEALTHSTORE_LOG").unwrap_or_else(|_| {
        let level = Config::load()
            .map(|c| c.log.level)
            .unwrap_or_else(|_| "warn".to_string());
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let (command, result) = match cli.command {
        Commands::Init => ("init", cmd::init::run(cli.human)),
        Commands::Log {
            metric,
            value,
            time,
            date,
            note,
            duration,
            distance,
            speed,
            elevation,
            steps,
            calories,
            meal,
            mood,
            other_symptoms,
            physical_symptoms,
            sexual_activity,
        } => {
            let entry = LogEntry {
                metric: &metric,
                value: value.as_deref(),
                time,
                date,
                note: note.as_deref(),
                duration,
                distance,
                speed,
                elevation,
                steps,
                calories,
                meal: meal.as_deref(),
                mood: mood.as_deref(),
                other_symptoms: other_symptoms.as_deref(),
                physical_symptoms: physical_symptoms.as_deref(),
                sexual_activity: sexual_activity.as_deref(),
            };
            ("log", cmd::log::run(&entry, cli.human))
        }
        Commands::Show { target, id, last } => (
            "show",
            cmd::show::run(target.as_deref(), id, last, cli.human),
        ),
        Commands::Delete { metric, id } => ("delete", cmd::delete::run(&metric, id, cli.human)),
        Commands::Profile { action } => (
            "profile",
            match action {
                ProfileAction::Show => cmd::profile::run_show(cli.human),
                ProfileAction::Set { key, value } => {
                    cmd::profile::run_set(&key, &value, cli.human)
                }
                ProfileAction::Reset => cmd::profile::run_reset(cli.human),
            },
        ),
        Commands::Config { action } => (
            "config",
            match action {
                ConfigAction::Show => cmd::config::run_show(cli.human),
                ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
            },
        ),
        Commands::Completions { shell } => ("completions", cmd::completions::run(shell)),
    };

    if let Err(e) = result {
        let code = match e.downcast_ref::<healthstore::store::StoreError>() {
            Some(healthstore::store::StoreError::PermissionDenied { .. }) => "permission_denied",
            _ => "general_error",
        };
        let err = output::error(command, code, &format!("{e:#}"));
        eprintln!("{}", err);
        process::exit(1);
    }
}
