use std::path::PathBuf;

use bedrock_profiles::types::Tag;
use bedrock_profiles::DEFAULT_REGION;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bpm",
    version,
    about = "Manage AWS Bedrock application inference profiles"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
    /// Region to operate in; defaults to AWS_REGION, then the config file
    #[arg(long, short = 'r', global = true)]
    pub region: Option<String>,
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// List the account's enabled regions
    Regions,
    /// List inference profiles in the region
    Profiles {
        /// List system-defined profiles instead of application profiles
        #[arg(long)]
        system: bool,
    },
    /// List on-demand foundation models
    Models,
    /// Show the tags of a profile
    Tags { arn: String },
    /// Create an application inference profile
    Create {
        #[arg(long)]
        name: String,
        /// ARN of the system-defined profile or foundation model to copy
        #[arg(long)]
        copy_from: String,
        #[arg(long)]
        description: Option<String>,
        /// Tag as KEY=VALUE; repeatable
        #[arg(long = "tag", value_parser = parse_tag)]
        tags: Vec<Tag>,
    },
    /// Delete an application inference profile by ARN or id
    Delete {
        identifier: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

fn parse_tag(raw: &str) -> Result<Tag, String> {
    raw.split_once('=')
        .map(|(key, value)| Tag::new(key, value))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

impl CliArgs {
    /// `--region`, then `env_region`, then the configured default.
    pub fn resolve_region(&self, env_region: Option<String>, configured: Option<&str>) -> String {
        let non_empty = |value: &String| !value.trim().is_empty();
        self.region
            .clone()
            .filter(non_empty)
            .or_else(|| env_region.filter(non_empty))
            .or_else(|| configured.map(str::to_string).filter(non_empty))
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }
}
