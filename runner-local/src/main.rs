use anyhow::{Context, Result};
use clap::Parser;
use greeting_core::telemetry::init_tracing;
use greeting_core::{GreetingHandler, load_config};
use serde_json::{Value, json};
use std::io::Read;

/// Invokes the greeting function locally with the same handler the Lambda
/// runtime uses, and prints the response to stdout.
#[derive(Parser, Debug)]
#[command(name = "greet", version, about = "Invoke the greeting function locally")]
struct Cli {
    /// Event payload as inline JSON
    #[arg(short = 'd', long, conflicts_with = "payload_file")]
    payload: Option<String>,

    /// Read the event payload from a file, `-` for stdin
    #[arg(short = 'f', long)]
    payload_file: Option<String>,

    /// YAML config file; falls back to GREETING_CONFIG when omitted
    #[arg(short, long, env = "GREETING_CONFIG_FILE")]
    config: Option<String>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let handler = GreetingHandler::new(config);

    let event = read_event(cli.payload, cli.payload_file)?;
    tracing::debug!(%event, "invoking greeting handler");

    let response = handler.handle(&event).context("Invocation failed")?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");
    Ok(())
}

fn read_event(payload: Option<String>, payload_file: Option<String>) -> Result<Value> {
    let raw = match (payload, payload_file) {
        (Some(p), _) => p,
        (_, Some(path)) if path == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Cannot read event from stdin")?;
            buf
        }
        (_, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read event file {path}"))?,
        _ => return Ok(json!({})),
    };
    serde_json::from_str(&raw).context("Event is not valid JSON")
}
