//! Command-line client for the label verification service.
//!
//! Stands in for the upload form: collects the image and label fields,
//! submits them through the gateway, and prints the verification report
//! or the normalized error message.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verify_client::{ClientConfig, VerifyClient};
use verify_sdk::{LabelFields, LabelVerification, UploadPayload, VerificationReport};
use verify_utils::format_file_size;

#[derive(Parser)]
#[command(name = "labelctl")]
#[command(about = "Submit label images to the verification service")]
#[command(version)]
struct Cli {
    /// Base address of the verification service (overrides TTB_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a label image and print the verification report
    Verify(VerifyArgs),
    /// Probe the service liveness route
    Health,
}

#[derive(Args)]
struct VerifyArgs {
    /// Path to the label image (JPEG or PNG)
    #[arg(long)]
    image: PathBuf,

    /// Name of the alcohol brand as printed on the label
    #[arg(long)]
    brand_name: String,

    /// Type of alcohol product (e.g. "Gin")
    #[arg(long)]
    product_type: String,

    /// Alcohol content in percent ABV
    #[arg(long)]
    alcohol_content: f64,

    /// Container volume (e.g. "750 mL")
    #[arg(long)]
    net_contents: Option<String>,

    /// Ask the service for the advanced OCR pass
    #[arg(long)]
    advanced_ocr: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let client = VerifyClient::new(config);

    match cli.command {
        Commands::Verify(args) => verify(&client, args).await,
        Commands::Health => health(&client).await,
    }
}

async fn verify(client: &VerifyClient, args: VerifyArgs) -> anyhow::Result<()> {
    let data = std::fs::read(&args.image)
        .with_context(|| format!("reading {}", args.image.display()))?;
    let content_type = content_type_for(&args.image)?;
    let file_name = args
        .image
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("label")
        .to_string();

    tracing::info!(
        file = %args.image.display(),
        size = %format_file_size(data.len() as u64),
        "submitting label image"
    );

    let fields = LabelFields {
        brand_name: args.brand_name,
        product_type: args.product_type,
        alcohol_content: args.alcohol_content,
        net_contents: args.net_contents,
    };
    let payload =
        UploadPayload::label_submission(file_name, content_type, data, &fields, args.advanced_ocr);

    // The gateway already collapsed every failure into the two-cause
    // error whose Display is the user-facing message, so `?` is enough.
    let body = client.verify_label(payload).await?;

    match VerificationReport::from_value(body.clone()) {
        Ok(report) => print_report(&report),
        Err(_) => println!("{}", serde_json::to_string_pretty(&body)?),
    }
    Ok(())
}

async fn health(client: &VerifyClient) -> anyhow::Result<()> {
    let response = client
        .health_check()
        .await
        .with_context(|| format!("probing {}", client.config().base_url))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    println!("{status} {body}");
    Ok(())
}

fn print_report(report: &VerificationReport) {
    let verdict = if report.success { "PASSED" } else { "FAILED" };
    println!("{verdict}: {}", report.message);

    let mut matched: Vec<&str> = report
        .matches
        .iter()
        .filter(|(_, ok)| **ok)
        .map(|(field, _)| field.as_str())
        .collect();
    matched.sort_unstable();
    if !matched.is_empty() {
        println!("  matched: {}", matched.join(", "));
    }
    for field in &report.mismatches {
        match report.close_matches.get(field) {
            Some(close) if !close.is_empty() => {
                println!("  mismatch: {field} (close: {})", close.join(", "));
            }
            _ => println!("  mismatch: {field}"),
        }
    }
}

fn content_type_for(path: &Path) -> anyhow::Result<mime::Mime> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => Ok(mime::IMAGE_JPEG),
        Some("png") => Ok(mime::IMAGE_PNG),
        _ => anyhow::bail!(
            "{}: only JPEG and PNG label images are supported",
            path.display()
        ),
    }
}
