mod cli;
mod config;
mod datasources;
mod db;
mod error;
mod logic;
mod models;
mod report;

use anyhow::Context;
use clap::Parser;
use cli::{AdviseArgs, Cli, Commands, LandArgs, LandCommand};
use config::Config;
use datasources::AdvisorApiClient;
use db::Database;
use dialoguer::Password;
use error::AdvisorError;
use logic::{weather_sync, AdviceRequest, RulesEngine, WeatherSyncService};
use models::{DayAdvice, LandInfo, WeatherForecast, WeatherState};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Advise(AdviseArgs::default()));

    match command {
        Commands::Init => {
            Config::setup_interactive(cli.config)?;
        }
        Commands::Rules => {
            for (id, name) in RulesEngine::new().list_rules() {
                println!("{:<16} {}", id, name);
            }
        }
        Commands::Advise(args) => {
            let request = AdviceRequest {
                date: args.date,
                all_days: args.all_days,
                rule: args.rule,
            };

            let result = match args.file {
                Some(path) => advise_from_file(&path, &request),
                None => {
                    let client = authorized_client(cli.config, cli.data_dir.as_ref())?;
                    let service = WeatherSyncService::new(client);
                    let state = service.refresh().await;
                    tracing::info!("Weather request finished: {}", state);

                    if let WeatherState::Error(ref message) = state {
                        eprintln!("{}", message);
                    }
                    service.recommendations(&request).await
                }
            };
            print_advice(result, args.json)?;
        }
        Commands::Prices { json } => {
            let client = authorized_client(cli.config, cli.data_dir.as_ref())?;
            let prices = exit_on_error(client.market_prices().await);
            if json {
                println!("{}", report::render_json(&prices)?);
            } else {
                print!("{}", report::render_prices(&prices));
            }
        }
        Commands::Land { command } => {
            let client = authorized_client(cli.config, cli.data_dir.as_ref())?;
            run_land(&client, command).await?;
        }
        Commands::Login { email } => {
            let config = load_config(cli.config)?;
            let db = Database::open(cli.data_dir.as_ref())?;

            let password = Password::new()
                .with_prompt("Password")
                .interact()
                .context("failed to read password")?;

            let client = AdvisorApiClient::new(config.api)?;
            let token = exit_on_error(client.login(&email, &password).await);
            db.store_access_token(&token)?;
            println!("Logged in as {}", email);
        }
        Commands::Logout => {
            let db = Database::open(cli.data_dir.as_ref())?;
            if db.clear_access_token()? {
                println!("Access token removed");
            } else {
                println!("No access token stored");
            }
        }
        Commands::Check => {
            let config = load_config(cli.config)?;
            println!("Config: OK");
            println!("  {:?}", config.api);

            let db = Database::open(cli.data_dir.as_ref())?;
            println!("Database: {}", db.path().display());

            let client = AdvisorApiClient::new(config.api)?.with_stored_token(db.access_token()?);
            println!(
                "Access token: {}",
                if client.has_token() { "present" } else { "missing" }
            );
            match client.test_connection().await {
                Ok(true) => println!("Advisory API: OK"),
                Ok(false) => println!("Advisory API: responded with an error status"),
                Err(e) => println!("Advisory API: OFFLINE ({})", e),
            }
        }
    }

    Ok(())
}

async fn run_land(client: &AdvisorApiClient, command: LandCommand) -> anyhow::Result<()> {
    match command {
        LandCommand::List { json } => {
            let lands = exit_on_error(client.list_land().await);
            if json {
                println!("{}", report::render_json(&lands)?);
            } else {
                print!("{}", report::render_land(&lands));
            }
        }
        LandCommand::Get { id, json } => {
            let land = exit_on_error(client.get_land(&id).await);
            if json {
                println!("{}", report::render_json(&land)?);
            } else {
                print!("{}", report::render_land(std::slice::from_ref(&land)));
            }
        }
        LandCommand::Create(fields) => {
            let created = exit_on_error(client.create_land(&land_from(fields)).await);
            println!(
                "Registered land {}",
                created.id.as_deref().unwrap_or("(no id returned)")
            );
        }
        LandCommand::Update { id, fields } => {
            exit_on_error(client.update_land(&id, &land_from(fields)).await);
            println!("Updated land {}", id);
        }
        LandCommand::Delete { id } => {
            exit_on_error(client.delete_land(&id).await);
            println!("Land info deleted successfully");
        }
        LandCommand::Weather { id, json } => {
            let land = exit_on_error(client.land_weather(&id).await);
            if !json {
                println!(
                    "Land {}: {:.2} ha of {} at {:.4}, {:.4}\n",
                    id, land.land.area, land.land.soil_type, land.land.latitude, land.land.longitude
                );
            }
            let result = match land.weather {
                Some(ref weather) => {
                    weather_sync::recommend(&RulesEngine::new(), weather, &AdviceRequest::default())
                }
                None => Err(AdvisorError::NoForecastAvailable),
            };
            print_advice(result, json)?;
        }
    }
    Ok(())
}

fn land_from(fields: LandArgs) -> LandInfo {
    LandInfo::new(fields.area, fields.soil_type, fields.latitude, fields.longitude)
}

fn load_config(config_override: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load(config_override)
        .context("could not load configuration (run `agriadvice init` to create one)")
}

/// API client carrying the configured or stored access token
fn authorized_client(
    config_override: Option<PathBuf>,
    data_dir: Option<&PathBuf>,
) -> anyhow::Result<AdvisorApiClient> {
    let config = load_config(config_override)?;
    let db = Database::open(data_dir)?;
    Ok(AdvisorApiClient::new(config.api)?.with_stored_token(db.access_token()?))
}

fn advise_from_file(path: &Path, request: &AdviceRequest) -> error::Result<Vec<DayAdvice>> {
    let content = std::fs::read_to_string(path)?;
    let weather: WeatherForecast = serde_json::from_str(&content)?;
    tracing::debug!(
        "Loaded {} forecast days from {}",
        weather.forecasts.len(),
        path.display()
    );
    weather_sync::recommend(&RulesEngine::new(), &weather, request)
}

fn print_advice(result: error::Result<Vec<DayAdvice>>, json: bool) -> anyhow::Result<()> {
    match result {
        Ok(days) if json => {
            println!("{}", report::render_json(&days)?);
        }
        Ok(days) => {
            print!("{}", report::render_text(&days));
        }
        Err(AdvisorError::NoForecastAvailable) => {
            println!("{}", report::render_error(&AdvisorError::NoForecastAvailable));
        }
        Err(e) => exit_with(&e),
    }
    Ok(())
}

fn exit_on_error<T>(result: error::Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => exit_with(&e),
    }
}

fn exit_with(error: &AdvisorError) -> ! {
    eprintln!("{}", report::render_error(error));
    std::process::exit(1);
}
