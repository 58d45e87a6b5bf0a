use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agriadvice",
    version,
    about = "Weather-driven agricultural recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override SQLite data directory
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the forecast and print recommendations (default)
    Advise(AdviseArgs),
    /// List the recommendation rules
    Rules,
    /// Show current market prices
    Prices {
        /// Print prices as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage registered land
    Land {
        #[command(subcommand)]
        command: LandCommand,
    },
    /// Log in and store the access token
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
    },
    /// Forget the stored access token
    Logout,
    /// Re-run interactive setup
    Init,
    /// Validate config and test connection
    Check,
}

#[derive(clap::Args, Default)]
pub struct AdviseArgs {
    /// Read a saved weather response instead of calling the API
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Forecast day to evaluate (YYYY-MM-DD); defaults to the first day
    #[arg(long, conflicts_with = "all_days")]
    pub date: Option<NaiveDate>,

    /// Evaluate every day in the forecast
    #[arg(long)]
    pub all_days: bool,

    /// Only run one rule (see `agriadvice rules`)
    #[arg(short, long)]
    pub rule: Option<String>,

    /// Print recommendations as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum LandCommand {
    /// List all registered land
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one plot
    Get {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Register a new plot
    Create(LandArgs),
    /// Replace a plot's details
    Update {
        id: String,
        #[command(flatten)]
        fields: LandArgs,
    },
    /// Remove a plot
    Delete { id: String },
    /// Recommendations from the forecast at a plot's location
    Weather {
        id: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
pub struct LandArgs {
    /// Area in hectares
    #[arg(long)]
    pub area: f64,

    /// Soil type, e.g. clay, loam, sandy
    #[arg(long)]
    pub soil_type: String,

    #[arg(long, allow_negative_numbers = true)]
    pub latitude: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub longitude: f64,
}
