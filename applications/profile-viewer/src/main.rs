/// Profile Viewer - single-screen profile demo
use clap::{Parser, Subcommand};
use profile_presenter::{PresenterError, ProfileViewModel};
use profile_service::{FakeNetworkService, FieldKind, ServiceConfig};
use profile_viewer::{
    commands,
    config::AppConfig,
    error::AppError,
    screen::{self, OutputFormat},
};
use std::{io, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "profile-viewer")]
#[command(about = "Fetch and display a user profile from a simulated service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PROFILE_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for reproducible success/failure rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the profile screen (default)
    Show {
        /// Print snapshots as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Fetch a single field: first-name, last-name, age or post-code
    Field {
        field: FieldKind,
    },
    /// Measure the failure rate over many instant fetches
    Sample {
        /// Number of fetches
        #[arg(short, long, default_value_t = 1000)]
        trials: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so rendered output stays on stdout)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "profile_viewer=info,profile_presenter=info,profile_service=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Show { json: false }) {
        Commands::Show { json } => {
            show(&config, cli.seed, json).await?;
        }
        Commands::Field { field } => {
            let service = build_service(config.service_config(), cli.seed);
            match commands::fetch_field(&service, field).await {
                Ok(value) => println!("{}: {}", field.label(), value),
                Err(e) => eprintln!("{}: {}", field.label(), e),
            }
        }
        Commands::Sample { trials } => {
            let report = commands::sample(&config.service_config(), cli.seed, trials).await;
            println!(
                "{} of {} fetches failed ({:.1}%)",
                report.failures,
                report.trials,
                report.failure_rate() * 100.0
            );
        }
    }

    Ok(())
}

async fn show(config: &AppConfig, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let service = build_service(config.service_config(), seed);
    let view_model = ProfileViewModel::with_stale_policy(Arc::new(service), config.stale_policy());

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text {
            color: config.view.color,
        }
    };

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    let mut stdout = io::stdout().lock();
    match screen::mount(&view_model, &mut stdout, format, shutdown).await {
        Ok(outcome) => {
            tracing::info!(failed = outcome.is_failure(), "Fetch finished");
            Ok(())
        }
        Err(AppError::Fetch(PresenterError::Cancelled)) => {
            tracing::info!("Fetch cancelled");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn build_service(config: ServiceConfig, seed: Option<u64>) -> FakeNetworkService {
    match seed {
        Some(seed) => FakeNetworkService::with_seed(config, seed),
        None => FakeNetworkService::new(config),
    }
}
