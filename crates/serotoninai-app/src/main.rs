//! SerotoninAI: terminal client for the serotonergic prediction backend.
//!
//! Startup:
//!   1. Load .env and install the tracing subscriber (stderr)
//!   2. Load serotoninai.toml and apply URL overrides
//!   3. Build the AppContext and the toast printer
//!   4. Run one subcommand, or the interactive shell

mod cli;
mod config;
mod context;
mod notify;
mod pages;
mod progress;
mod render;
mod router;
mod shell;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use context::AppContext;
use pages::{help, home, BatchPage, BbbPage, HiaPage, Outcome, ReceptorsPage, SertPage};
use progress::with_spinner;
use shell::Shell;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("serotoninai=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", console::style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the requested operation succeeded.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli::env_api_url(), cli.api_url.clone());
    if let Some(dir) = &cli.svg {
        config.display.svg_dir = Some(dir.display().to_string());
    }
    console::set_colors_enabled(config.display.color);
    console::set_colors_enabled_stderr(config.display.color);

    let ctx = AppContext::new(&config).context("Could not set up the prediction client")?;
    info!(api = %ctx.api_url, "SerotoninAI starting");

    let printer = notify::spawn_printer(ctx.toasts.subscribe());
    let ok = dispatch(cli.command.unwrap_or(Commands::Shell), ctx).await;
    // Every Toaster is gone once dispatch returns; the printer drains and exits.
    printer.await.ok();
    ok
}

async fn dispatch(command: Commands, ctx: AppContext) -> anyhow::Result<bool> {
    match command {
        Commands::Receptors { compound, receptor } => {
            let mut page = ReceptorsPage::new();
            if !page.select(&ctx, &receptor) {
                return Ok(false);
            }
            let outcome = with_spinner("Predicting…", page.submit(&ctx, &compound)).await;
            Ok(finish(outcome, || page.render()))
        }
        Commands::Sert { compound } => {
            let mut page = SertPage::new();
            let outcome = with_spinner("Predicting…", page.submit(&ctx, &compound)).await;
            Ok(finish(outcome, || page.render()))
        }
        Commands::Hia { compound } => {
            let mut page = HiaPage::new();
            let outcome = with_spinner("Predicting…", page.submit(&ctx, &compound)).await;
            Ok(finish(outcome, || page.render()))
        }
        Commands::Bbb { compound } => {
            let mut page = BbbPage::new();
            let outcome = with_spinner("Predicting…", page.submit(&ctx, &compound)).await;
            Ok(finish(outcome, || page.render()))
        }
        Commands::Batch { file, models, output } => {
            let mut page = BatchPage::new(models.unwrap_or_else(|| ctx.batch.selection()));
            page.load_file(&ctx, &file)?;
            let outcome = with_spinner("Processing batch…", page.process(&ctx)).await;
            if !finish(outcome, || page.render()) {
                return Ok(false);
            }
            let dir = output.unwrap_or_else(|| ctx.output_dir());
            if let Some(path) = page.export(&ctx, &dir, chrono::Utc::now().date_naive())? {
                println!("{}", path.display());
            }
            Ok(true)
        }
        Commands::Home => {
            println!("{}", home::render());
            Ok(true)
        }
        Commands::HelpPage => {
            println!("{}", help::render());
            Ok(true)
        }
        Commands::Shell => {
            Shell::new(ctx).run().await?;
            Ok(true)
        }
    }
}

/// Print the page when something came back and report success.
fn finish(outcome: Outcome, render: impl FnOnce() -> String) -> bool {
    if outcome.is_success() {
        println!("{}", render());
    }
    outcome.is_success()
}
