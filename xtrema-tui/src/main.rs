use std::io::{Write, stdout};
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use xtrema_ai::{AnalysisGateway, GeminiConfig};
use xtrema_tui::TuiModule;

#[derive(Parser, Debug, Clone)]
#[command(name = "xtrema")]
#[command(author, version, about = "Xtrema - waste photo analysis and pickup scheduling")]
struct Args {
    /// Gemini API key (overrides GEMINI_API_KEY / API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Model used for analysis (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Base URL of the generative language API (overrides GEMINI_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Request timeout in seconds (overrides GEMINI_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Never call the analysis service; every report uses the default breakdown
    #[arg(long, default_value = "false")]
    offline: bool,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    no_color: bool,
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("xtrema=info".parse()?);
    let sub = fmt().with_env_filter(filter).with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(sub)?;
    Ok(())
}

/// Applies command-line overrides on top of the environment settings.
fn build_config(args: &Args, mut config: GeminiConfig) -> GeminiConfig {
    if let Some(key) = &args.api_key {
        config.api_key = key.clone();
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(base) = &args.api_base {
        config.api_base = base.clone();
    }
    if args.timeout_secs.is_some() {
        config.timeout_secs = args.timeout_secs;
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing()?;
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = build_config(&args, GeminiConfig::from_env());
    if !config.has_api_key() && !args.offline {
        warn!("No Gemini API key configured; analysis will use fallback data");
    }
    let gateway = AnalysisGateway::from_config(config, args.offline)?;
    info!("Xtrema starting. provider={}", gateway.provider_name());

    let mut tui = TuiModule::new(Arc::new(gateway));

    println!("{}", tui.render_current());
    println!("Type 'help' for available commands.\n");

    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", tui.prompt_string());
        stdout().flush()?;

        let line = match reader.next_line().await? {
            Some(line) => line.trim().to_string(),
            None => break, // EOF
        };

        let (quit_requested, output) = tui.process_line(&line).await;
        if !output.is_empty() {
            println!("{}", output.trim_end());
        }

        if quit_requested {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}
