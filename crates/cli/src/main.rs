use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use reelflow_types::{REFERENCE_WORKFLOW, Tab};
use reelflow_util::{Settings, default_log_path};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter; falls back to `RUST_LOG`.
const LOG_FILTER_ENV: &str = "REELFLOW_LOG";

/// YouTube → TikTok automation workflow for Pabbly Connect.
///
/// With no subcommand, opens the interactive page.
#[derive(Parser, Debug)]
#[command(name = "reelflow", version, about)]
struct Cli {
    /// Tab to show first (workflow or instructions)
    #[arg(long, global = true)]
    tab: Option<Tab>,

    /// Color theme id or alias (orchid, ansi256)
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the workflow document to stdout
    Json {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Yaml,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Json { format }) => {
            init_tracing(LogTarget::Stderr);
            print_document(format)
        }
        None => {
            init_tracing(LogTarget::File(&default_log_path()));
            let settings = Settings::load()
                .context("failed to load settings")?
                .with_overrides(cli.theme, cli.tab);
            debug!(?settings, "resolved settings");
            reelflow_tui::run(settings).await
        }
    }
}

enum LogTarget<'a> {
    Stderr,
    /// The TUI owns the terminal, so events go to a file instead.
    File(&'a Path),
}

fn log_filter() -> EnvFilter {
    std::env::var(LOG_FILTER_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|filter| EnvFilter::try_new(filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn init_tracing(target: LogTarget<'_>) {
    let builder = tracing_subscriber::fmt().with_env_filter(log_filter());
    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
        LogTarget::File(path) => match open_log_file(path) {
            Ok(file) => {
                let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
            }
            // Without a log file, stay silent rather than draw over the TUI.
            Err(_) => {
                let _ = tracing_subscriber::fmt().with_writer(io::sink).try_init();
            }
        },
    }
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn print_document(format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => REFERENCE_WORKFLOW.to_pretty_json().context("failed to serialize workflow")?,
        OutputFormat::Yaml => serde_yaml::to_string(&*REFERENCE_WORKFLOW).context("failed to serialize workflow")?,
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;
    Ok(())
}
