// src/main.rs
// Daily Prompt - serves one creative prompt per day

use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use daily_prompt::api::{AppState, create_router};
use daily_prompt::llm::GeminiClient;
use daily_prompt::scheduler::spawn_daily_scheduler;
use daily_prompt::store::SqlitePromptStore;
use daily_prompt::{Calendar, Config, DailyPromptService, PromptGenerator, ScheduledOutcome};

#[derive(Parser)]
#[command(name = "daily-prompt")]
#[command(about = "Generates, caches and serves one creative prompt per day")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server and the daily refresh scheduler (default)
    Serve {
        /// Address to bind (overrides DAILY_PROMPT_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides DAILY_PROMPT_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the scheduled freshness check once, for external cron
    Refresh {
        /// Regenerate even if today's prompt is already stored
        #[arg(long)]
        force: bool,
    },

    /// Print the stored prompt record
    Show,
}

async fn build_service(config: &Config) -> Result<Arc<DailyPromptService>> {
    let store = SqlitePromptStore::connect(&config.database_url).await?;

    let http = GeminiClient::build_http_client(config.generation_timeout)?;
    let gemini = GeminiClient::with_http_client(config.gemini_api_key.clone(), config.gemini_model.clone(), http)
        .with_base_url(config.gemini_base_url.clone());
    info!("Prompt backend: Gemini ({})", gemini.model());

    let generator = PromptGenerator::new(Arc::new(gemini));
    let calendar = Calendar::system(config.timezone);

    Ok(Arc::new(DailyPromptService::new(Arc::new(store), generator, calendar)))
}

async fn run_server(config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let service = build_service(&config).await?;

    let scheduler = spawn_daily_scheduler(service.clone(), config.schedule_at);
    info!(
        "Daily refresh at {} {}",
        config.schedule_at.format("%H:%M"),
        config.timezone
    );

    let app = create_router(AppState::new(service));

    let bind_address = format!(
        "{}:{}",
        host.unwrap_or(config.host),
        port.unwrap_or(config.port)
    );
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Daily prompt service listening on http://{}", bind_address);

    tokio::select! {
        result = axum::serve(listener, app).into_future() => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = scheduler => {
            error!("Daily scheduler unexpectedly terminated");
        }
    }

    Ok(())
}

async fn run_refresh(config: Config, force: bool) -> Result<()> {
    let service = build_service(&config).await?;

    if force {
        let outcome = service.get_prompt(true).await?;
        println!("{} ({}, {})", outcome.record.prompt, outcome.record.date, outcome.source.as_str());
        return Ok(());
    }

    match service.scheduled_refresh().await? {
        ScheduledOutcome::Skipped(record) => {
            println!("{} ({}, already fresh)", record.prompt, record.date);
        }
        ScheduledOutcome::Refreshed(outcome) => {
            println!("{} ({}, {})", outcome.record.prompt, outcome.record.date, outcome.source.as_str());
        }
    }
    Ok(())
}

async fn run_show(config: Config) -> Result<()> {
    let service = build_service(&config).await?;

    match service.current().await? {
        Some(record) => {
            let today = service.calendar().today().to_string();
            let status = if record.date == today { "fresh" } else { "stale" };
            println!("{} ({}, {})", record.prompt, record.date, status);
        }
        None => println!("No prompt stored yet"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing API key stops here, before the database or port is touched
    let config = Config::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None => run_server(config, None, None).await,
        Some(Commands::Serve { host, port }) => run_server(config, host, port).await,
        Some(Commands::Refresh { force }) => run_refresh(config, force).await,
        Some(Commands::Show) => run_show(config).await,
    }
}
