use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{execute, terminal};
use uwc_cli::config::Config;
use uwc_client::ApiClient;

#[derive(Parser)]
#[command(name = "uwc")]
#[command(about = "UW Companion - AI-assisted underwriting terminal client")]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides UWC_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds (overrides UWC_REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Append logs to this file (overrides UWC_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    if let Some(api_url) = cli.api_url {
        Config::validate_api_url(&api_url)?;
        config.api_url = api_url;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.request_timeout_secs = timeout_secs.max(1);
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = Some(log_file);
    }

    if let Some(log_file) = &config.log_file {
        uwc_cli::logging::init(log_file)?;
    }

    tracing::info!(api_url = %config.api_url, "starting UW Companion client");

    let client = ApiClient::with_timeout(
        &config.api_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let mut app = uwc_tui::App::new(client);

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Run the application with proper cleanup
    let result = app.run(&mut terminal).await;

    // Always restore the terminal, even if the app errored
    let cleanup_result = (|| -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
        Ok(())
    })();

    if let Err(cleanup_error) = cleanup_result {
        eprintln!("Terminal cleanup error: {cleanup_error}");
    }

    result
}
