mod commands;
mod tui;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use bedrock_profiles::{AwsConsole, Credentials};
use clap::Parser;

use crate::args::CliArgs;
use crate::config::load_config;
use crate::logging::init_logging;

const REGION_VAR: &str = "AWS_REGION";

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;
    log::debug!(
        "config {} (present: {})",
        loaded.paths.config_file.display(),
        loaded.config_exists
    );

    let region = args.resolve_region(
        std::env::var(REGION_VAR).ok(),
        loaded.config.default_region.as_deref(),
    );
    let credentials = Credentials::from_env(&loaded.config.credentials);

    let Some(command) = args.command.clone() else {
        return tui::run_tui(&loaded.config, credentials, region).await;
    };

    let credentials = credentials.context("cannot reach AWS")?;
    let console = AwsConsole::new(credentials, region.clone());
    let mut output = commands::Output::new(io::stdout().lock(), args.json);
    commands::run_command(&console, &region, command, &mut output, &mut prompt_stdin).await
}

fn prompt_stdin(question: &str) -> anyhow::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
