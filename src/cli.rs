use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "healthstore",
    version,
    about = "Capability-gated health records store"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default config and create the database
    Init,

    /// Record one measurement
    Log {
        /// Metric name (e.g. weight, blood_pressure, sleep) or alias
        metric: String,

        /// Primary value; SYSTOLIC/DIASTOLIC for blood_pressure
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// Timestamp in milliseconds since the epoch
        #[arg(long, conflicts_with = "date")]
        time: Option<i64>,

        /// Date (YYYY-MM-DD), recorded at noon UTC
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<f64>,

        /// Distance in km (miles with imperial units)
        #[arg(long)]
        distance: Option<f64>,

        /// Average speed in km/h
        #[arg(long)]
        speed: Option<f64>,

        /// Elevation gain in metres
        #[arg(long)]
        elevation: Option<f64>,

        #[arg(long)]
        steps: Option<i32>,

        #[arg(long)]
        calories: Option<f64>,

        /// Glucose reading relative to a meal: before, after
        #[arg(long)]
        meal: Option<String>,

        /// Mood level: very_bad, bad, neutral, good, very_good
        #[arg(long)]
        mood: Option<String>,

        /// Comma-separated menstrual cycle symptoms (acne, insomnia, ...)
        #[arg(long)]
        other_symptoms: Option<String>,

        /// Comma-separated physical symptoms (bloating, headache, ...)
        #[arg(long)]
        physical_symptoms: Option<String>,

        /// Comma-separated sexual activity flags
        #[arg(long)]
        sexual_activity: Option<String>,
    },

    /// List records of a domain or metric, oldest first
    Show {
        /// Domain (activity, body, ...) or metric name or alias
        target: Option<String>,

        /// Fetch the single record with this id (needs a metric)
        #[arg(long)]
        id: Option<i64>,

        /// Only the most recent N records
        #[arg(long)]
        last: Option<usize>,
    },

    /// Delete one record
    Delete {
        /// Metric name or alias
        metric: String,
        id: i64,
    },

    /// Show or edit the medical profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the stored profile
    Show,
    /// Set one profile field
    Set {
        /// allergies, blood_type, height, medications, notes, organ_donor, biological_sex
        key: String,
        value: String,
    },
    /// Remove the stored profile
    Reset,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. units.system, log.level, access.granted, alias.w)
        key: String,
        /// Config value
        value: String,
    },
}
