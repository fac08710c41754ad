use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use heartbeat::server::{self, AppContext};
use heartbeat::ui::cli::args::{Cli, Command, ModelArgs, ServeArgs};
use heartbeat::ui::cli::check::CheckReport;
use heartbeat::ui::cli::probe::run_probe;
use heartbeat::ui::cli::schema::predict_schemas;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(args).await.map(|_| ExitCode::SUCCESS),
        Command::Check(args) => Ok(check(&args)),
        Command::Probe(args) => run_probe(&args).await.map(|_| ExitCode::SUCCESS),
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&predict_schemas())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    tracing::info!(
        "Starting heartbeat {} (policy={}, model_dir={})",
        env!("CARGO_PKG_VERSION"),
        args.model.policy,
        args.model.model_dir.display()
    );

    let context = AppContext::load(&args.model.artifact_paths(), args.model.policy)
        .context("failed to load model artifacts")?;

    server::serve(Arc::new(context), args.socket_addr())
        .await
        .with_context(|| format!("server on {} failed", args.socket_addr()))
}

fn check(args: &ModelArgs) -> ExitCode {
    let report = CheckReport::inspect(&args.artifact_paths(), args.policy);

    println!("{BOLD}{FG_CYAN}▶ Model artifact check{RESET}  {}", timestamp_now());
    println!("{report}");

    if !report.is_servable() {
        println!("{FG_RED}{BOLD}✗ required artifacts missing or invalid{RESET}");
        ExitCode::FAILURE
    } else if !report.is_consistent() {
        println!("{BOLD}! artifacts load but /predict is likely to fail{RESET}");
        ExitCode::SUCCESS
    } else {
        println!("{FG_GREEN}{BOLD}✓ artifacts ready{RESET}");
        ExitCode::SUCCESS
    }
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
