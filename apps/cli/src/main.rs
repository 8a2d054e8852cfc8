//! Headless color changer: reads intents from stdin, prints a JSON snapshot
//! to stdout after every state change. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use color_core::{load_settings, ClipboardSink, ColorStateController, TokioTimers};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod clipboard;
mod session;

use clipboard::{FileClipboard, LogClipboard};
use session::{run_session, SessionOptions};

#[derive(Parser, Debug)]
#[command(name = "color-changer", about = "Drive the color-state controller from stdin")]
struct Args {
    /// Settings file; missing means defaults.
    #[arg(long, default_value = "settings.toml")]
    config: PathBuf,
    /// Write copied colors to this file instead of the log.
    #[arg(long)]
    clipboard_file: Option<PathBuf>,
    /// Pretty-print snapshots.
    #[arg(long)]
    pretty: bool,
    /// Exit as soon as stdin closes, without waiting for transient flags to clear.
    #[arg(long)]
    no_settle: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let clipboard: Box<dyn ClipboardSink> = match args.clipboard_file.clone() {
        Some(path) => Box::new(FileClipboard::new(path)),
        None => Box::new(LogClipboard),
    };
    let mut controller = ColorStateController::new(&settings, TokioTimers::new(), clipboard);
    let options = SessionOptions {
        pretty: args.pretty,
        no_settle: args.no_settle,
    };

    let result = run_session(
        &mut controller,
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
        options,
    )
    .await;
    controller.shutdown();
    result
}
