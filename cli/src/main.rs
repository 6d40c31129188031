//! ocbridge CLI
//!
//! Command-line interface for turning recorded spans and view data into
//! OpenCensus agent export requests.
//!
//! # Usage
//!
//! ```bash
//! ocbridge --help
//! ocbridge spans --input spans.json --output trace.bin
//! ocbridge views --input views.json --service checkout > metrics.bin
//! ocbridge resource
//! ```

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use ocbridge::config::SpanLimits;
use ocbridge::export::{translate_spans, translate_views, ExportRequest};
use ocbridge::models::{SpanData, ViewData};
use ocbridge::resource::{EnvResourceDetector, NodeDetector, ProcessNodeDetector, ResourceDetector};
use prost::Message;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};

/// ocbridge CLI - OpenCensus agent request builder
#[derive(Parser)]
#[command(name = "ocbridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON array of spans into an encoded trace export request
    Spans(ExportArgs),
    /// Convert a JSON array of view data into an encoded metrics export request
    Views(ExportArgs),
    /// Print the resource detected from the environment
    Resource,
}

#[derive(Args)]
struct ExportArgs {
    /// JSON file to read
    #[arg(short, long)]
    input: PathBuf,

    /// File to write the encoded request to (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Service name reported in the node
    #[arg(short, long, env = "OCBRIDGE_SERVICE_NAME", default_value = "ocbridge")]
    service: String,
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_request(request: &impl Message, output: Option<&Path>) -> Result<()> {
    let bytes = request.encode_to_vec();

    match output {
        Some(path) => std::fs::write(path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(&bytes)
            .context("Failed to write to stdout")?,
    }

    tracing::info!(bytes = bytes.len(), "Wrote export request");
    Ok(())
}

fn attach_metadata<R: ExportRequest>(request: R, service: &str, started: &DateTime<Utc>) -> R {
    let node = ProcessNodeDetector::new().detect(service);
    let request = request.with_node(&node, started);

    match EnvResourceDetector::from_env().detect() {
        Some(resource) => request.with_resource(&resource),
        None => request,
    }
}

fn export_spans(args: &ExportArgs, started: &DateTime<Utc>) -> Result<()> {
    let spans: Vec<SpanData> = read_records(&args.input)?;
    let spans: Vec<SpanData> = spans
        .into_iter()
        .filter(|span| match span.validate_span() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(span_id = %span.span_id, error = %e, "Skipping invalid span");
                false
            }
        })
        .collect();

    let limits = SpanLimits::from_env().context("Invalid span limits")?;
    let request = translate_spans(&spans, &limits);
    tracing::info!(spans = request.spans.len(), "Built trace export request");

    let request = attach_metadata(request, &args.service, started);
    write_request(&request, args.output.as_deref())
}

fn export_views(args: &ExportArgs, started: &DateTime<Utc>) -> Result<()> {
    let views: Vec<ViewData> = read_records(&args.input)?;
    let views: Vec<ViewData> = views
        .into_iter()
        .filter(|data| match data.validate_view_data() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(view = %data.view.name, error = %e, "Skipping invalid view data");
                false
            }
        })
        .collect();

    let request = translate_views(&views);
    tracing::info!(metrics = request.metrics.len(), "Built metrics export request");

    let request = attach_metadata(request, &args.service, started);
    write_request(&request, args.output.as_deref())
}

fn print_resource() -> Result<()> {
    let resource = EnvResourceDetector::from_env()
        .try_detect()
        .context("Invalid OC_RESOURCE_LABELS")?;
    println!("{}", serde_json::to_string_pretty(&resource)?);
    Ok(())
}

fn main() -> Result<()> {
    let started = Utc::now();
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Spans(args)) => export_spans(&args, &started),
        Some(Commands::Views(args)) => export_views(&args, &started),
        Some(Commands::Resource) => print_resource(),
        None => {
            println!("ocbridge CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["ocbridge"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_spans_command() {
        let cli = Cli::try_parse_from([
            "ocbridge",
            "spans",
            "--input",
            "spans.json",
            "--output",
            "trace.bin",
            "--service",
            "checkout",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Spans(args)) => {
                assert_eq!(args.input, PathBuf::from("spans.json"));
                assert_eq!(args.output, Some(PathBuf::from("trace.bin")));
                assert_eq!(args.service, "checkout");
            }
            _ => panic!("expected spans command"),
        }
    }

    #[test]
    fn test_cli_views_requires_input() {
        let cli = Cli::try_parse_from(["ocbridge", "views"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_resource_command() {
        let cli = Cli::try_parse_from(["ocbridge", "resource"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Resource)));
    }

    #[test]
    fn test_read_records_reports_missing_file() {
        let err = read_records::<SpanData>(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
