use std::io::Write;

use anyhow::Context;
use bedrock_profiles::form::ProfileForm;
use bedrock_profiles::resources::{self, CreateOutcome, DeleteOutcome};
use bedrock_profiles::types::{ProfileType, Tag};
use bedrock_profiles::ConsoleApi;
use serde::Serialize;

use crate::args::CliCommand;

/// Writes command results as text lines or as pretty JSON.
pub struct Output<W> {
    writer: W,
    json: bool,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, json: bool) -> Self {
        Self { writer, json }
    }

    fn emit<T, F>(&mut self, value: &T, text: F) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> Vec<String>,
    {
        if self.json {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
            writeln!(self.writer)?;
        } else {
            for line in text(value) {
                writeln!(self.writer, "{line}")?;
            }
        }
        Ok(())
    }
}

pub type Confirm<'a> = dyn FnMut(&str) -> anyhow::Result<bool> + 'a;

pub async fn run_command<A, W>(
    api: &A,
    region: &str,
    command: CliCommand,
    out: &mut Output<W>,
    confirm: &mut Confirm<'_>,
) -> anyhow::Result<()>
where
    A: ConsoleApi + ?Sized,
    W: Write,
{
    match command {
        CliCommand::Regions => {
            let regions = resources::list_regions(api).await?;
            out.emit(&regions, |regions| regions.to_vec())
        }
        CliCommand::Profiles { system } => {
            let profile_type = if system {
                ProfileType::SystemDefined
            } else {
                ProfileType::Application
            };
            let profiles = resources::list_profiles(api, region, profile_type).await?;
            out.emit(&profiles, |profiles| {
                profiles
                    .iter()
                    .map(|p| {
                        let models: Vec<&str> = p.model_arns().collect();
                        format!(
                            "{}\t{}\t{}\t{}",
                            p.name,
                            p.arn,
                            p.status.as_deref().unwrap_or("-"),
                            models.join(",")
                        )
                    })
                    .collect()
            })
        }
        CliCommand::Models => {
            let models = resources::list_foundation_models(api, region).await?;
            out.emit(&models, |models| {
                models
                    .iter()
                    .map(|m| {
                        format!(
                            "{}\t{} {}",
                            m.model_arn,
                            m.provider_name.as_deref().unwrap_or_default(),
                            m.model_name.as_deref().unwrap_or_default()
                        )
                    })
                    .collect()
            })
        }
        CliCommand::Tags { arn } => {
            let tags = resources::list_tags(api, region, &arn).await?;
            out.emit(&tags, |tags| {
                tags.iter()
                    .map(|t| format!("{}={}", t.key, t.value))
                    .collect()
            })
        }
        CliCommand::Create {
            name,
            copy_from,
            description,
            tags,
        } => {
            let form = build_form(&name, &copy_from, description.as_deref(), &tags)?;
            let outcome = resources::create_profile(api, region, Some(&form)).await?;
            out.emit(&outcome, |outcome| match outcome {
                CreateOutcome::Created(created) => vec![created.arn.clone()],
                CreateOutcome::Skipped => vec!["nothing to create".to_string()],
            })
        }
        CliCommand::Delete { identifier, yes } => {
            if !yes && !confirm(&format!("Delete inference profile {identifier} in {region}?"))? {
                log::info!("delete of {identifier} cancelled");
                return Ok(());
            }
            let outcome = resources::delete_profile(api, region, Some(&identifier)).await?;
            out.emit(&outcome, |outcome| match outcome {
                DeleteOutcome::Deleted { identifier } => vec![format!("deleted {identifier}")],
                DeleteOutcome::Skipped => vec!["nothing to delete".to_string()],
            })
        }
    }
}

/// Runs the arguments through the same gates as the console's create form.
fn build_form(
    name: &str,
    copy_from: &str,
    description: Option<&str>,
    tags: &[Tag],
) -> anyhow::Result<bedrock_profiles::types::FormFields> {
    let mut form = ProfileForm::new();
    form.set_name(name).context("invalid --name")?;
    if let Some(description) = description {
        form.set_description(description)
            .context("invalid --description")?;
    }
    form.set_copy_from(copy_from);
    let editor = form.tags_mut();
    for tag in tags {
        editor.add_row();
        if let Some(id) = editor.rows().last().map(|row| row.id) {
            editor.update_key(id, &tag.key);
            editor.update_value(id, &tag.value);
        }
    }
    form.submit().map_err(|err| {
        let rows = form
            .tags()
            .rows()
            .iter()
            .filter_map(|row| row.error.map(|e| format!("{}: {e}", row.key)))
            .collect::<Vec<_>>();
        if rows.is_empty() {
            anyhow::anyhow!("{err}")
        } else {
            anyhow::anyhow!("{err}: {}", rows.join("; "))
        }
    })
}
