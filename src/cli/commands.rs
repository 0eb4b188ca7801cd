//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::{ConfigCommand, OutputArgs};
use crate::config::Settings;
use crate::llm::build_provider;
use crate::pipeline::{
    ArtifactKind, ArtifactResult, EmailOutcome, Pipeline, RunReport, SummaryFailurePolicy,
};
use crate::storage::{read_input, ArtifactStore};

/// Options for `recap generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub output: OutputArgs,
    pub save_errors: bool,
    pub continue_on_error: bool,
    pub json: bool,
}

/// Summarize a transcript and draft the follow-up email
pub async fn generate(
    settings: &Settings,
    transcript: &Path,
    opts: GenerateOptions,
) -> Result<()> {
    let transcript = read_input(transcript)?;
    if !opts.json {
        println!("Transcript length: {} characters", transcript.chars().count());
        println!();
    }

    let provider = build_provider(settings)?;
    let policy = if opts.continue_on_error {
        SummaryFailurePolicy::Continue
    } else {
        settings.pipeline.on_summary_failure
    };
    let output = Pipeline::new(provider.as_ref())
        .with_summary_failure_policy(policy)
        .run(&transcript)
        .await;

    let store = artifact_store(settings, &opts.output);

    let summary_path = persist(
        store.as_ref(),
        ArtifactKind::Summary,
        &output.summary,
        opts.save_errors,
    )?;
    let email_path = match output.email.result() {
        Some(email) => persist(
            store.as_ref(),
            ArtifactKind::Email,
            email,
            opts.save_errors,
        )?,
        None => None,
    };

    if opts.json {
        println!(
            "{}",
            serde_json::to_string_pretty(
                &RunReport::from_output(&transcript, &output)
                    .with_saved_paths(summary_path.as_deref(), email_path.as_deref())
            )?
        );
    } else {
        print_artifact("Summary", &output.summary, summary_path.as_deref());
        println!();
        match &output.email {
            EmailOutcome::Generated(email) => {
                print_artifact("Follow-up Email", email, email_path.as_deref())
            }
            EmailOutcome::Skipped => {
                println!("== Follow-up Email ==");
                println!("Skipped: summary generation failed.");
            }
        }
    }

    if let Err(err) = &output.summary {
        anyhow::bail!("Pipeline did not complete: {}", err);
    }
    if let EmailOutcome::Generated(Err(err)) = &output.email {
        anyhow::bail!("Pipeline did not complete: {}", err);
    }

    Ok(())
}

/// Summarize a transcript without drafting an email
pub async fn summarize(
    settings: &Settings,
    transcript: &Path,
    output: OutputArgs,
    json: bool,
) -> Result<()> {
    let transcript = read_input(transcript)?;
    let provider = build_provider(settings)?;
    let summary = Pipeline::new(provider.as_ref()).summarize(&transcript).await;

    let store = artifact_store(settings, &output);
    let path = persist(store.as_ref(), ArtifactKind::Summary, &summary, false)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(
                &RunReport::from_summary(&transcript, &summary)
                    .with_saved_paths(path.as_deref(), None)
            )?
        );
    } else {
        println!("Transcript length: {} characters", transcript.chars().count());
        println!();
        print_artifact("Summary", &summary, path.as_deref());
    }

    summary.map(|_| ()).map_err(anyhow::Error::from)
}

/// Draft a follow-up email from a saved summary
pub async fn email(settings: &Settings, summary: &Path, output: OutputArgs) -> Result<()> {
    let summary = read_input(summary)?;
    let provider = build_provider(settings)?;
    let email = Pipeline::new(provider.as_ref()).draft_email(summary.trim()).await;

    let store = artifact_store(settings, &output);
    let path = persist(store.as_ref(), ArtifactKind::Email, &email, false)?;
    print_artifact("Follow-up Email", &email, path.as_deref());

    email.map(|_| ()).map_err(anyhow::Error::from)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    version: &'static str,
    provider: String,
    model: String,
    endpoint: String,
    on_summary_failure: SummaryFailurePolicy,
    checks: Vec<DoctorCheck>,
    notes: Vec<String>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} doctor ({})", crate::APP_NAME, report.version);
    println!("provider: {}", report.provider);
    println!("model: {}", report.model);
    println!("endpoint: {}", report.endpoint);
    println!();

    for check in &report.checks {
        println!("{:<12} {:<8} {}", check.name, check.status, check.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let mut notes = Vec::new();
    let mut checks = Vec::new();

    let provider = build_provider(settings);
    checks.push(DoctorCheck {
        name: "api-key",
        status: if settings.has_api_key() { "ok" } else { "missing" },
        detail: "required before any generation request".to_string(),
    });
    checks.push(DoctorCheck {
        name: "provider",
        status: if provider.is_ok() { "ok" } else { "error" },
        detail: match &provider {
            Ok(client) => format!("{} client ready", client.name()),
            Err(err) => err.to_string(),
        },
    });

    let output_dir = &settings.general.output_dir;
    let (status, detail) = match check_output_dir(output_dir) {
        OutputDirState::Writable => ("ok", output_dir.display().to_string()),
        OutputDirState::Missing => (
            "missing",
            format!("{} (created on first save)", output_dir.display()),
        ),
        OutputDirState::NotWritable(reason) => {
            ("error", format!("{}: {}", output_dir.display(), reason))
        }
    };
    checks.push(DoctorCheck {
        name: "output-dir",
        status,
        detail,
    });

    if !settings.has_api_key() {
        notes.push(format!(
            "hint: set llm.api_key in {} or export {}.",
            Settings::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string()),
            crate::config::API_KEY_ENV_VARS[0]
        ));
    }
    if settings.pipeline.on_summary_failure == SummaryFailurePolicy::Continue {
        notes.push(
            "warning: pipeline.on_summary_failure = \"continue\" drafts emails from summary error text."
                .to_string(),
        );
    }

    DoctorReport {
        version: crate::VERSION,
        provider: settings.llm.provider.clone(),
        model: settings.llm.model.clone(),
        endpoint: if settings.llm.endpoint.trim().is_empty() {
            "(provider default)".to_string()
        } else {
            settings.llm.endpoint.clone()
        },
        on_summary_failure: settings.pipeline.on_summary_failure,
        checks,
        notes,
    }
}

// Helper functions

enum OutputDirState {
    Writable,
    Missing,
    NotWritable(String),
}

fn check_output_dir(dir: &Path) -> OutputDirState {
    if !dir.exists() {
        return OutputDirState::Missing;
    }
    if !dir.is_dir() {
        return OutputDirState::NotWritable("not a directory".to_string());
    }

    let marker = dir.join(".recap-doctor-write-test");
    match std::fs::write(&marker, b"") {
        Ok(()) => {
            if let Err(e) = std::fs::remove_file(&marker) {
                tracing::warn!("Failed to remove {}: {}", marker.display(), e);
            }
            OutputDirState::Writable
        }
        Err(e) => OutputDirState::NotWritable(e.to_string()),
    }
}

fn artifact_store(settings: &Settings, output: &OutputArgs) -> Option<ArtifactStore> {
    if output.no_save {
        return None;
    }

    let dir = output
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.general.output_dir.clone());
    Some(ArtifactStore::new(dir))
}

/// Save a step's result. Failures are only written when `save_errors` is set.
fn persist(
    store: Option<&ArtifactStore>,
    kind: ArtifactKind,
    result: &ArtifactResult,
    save_errors: bool,
) -> Result<Option<PathBuf>> {
    let Some(store) = store else {
        return Ok(None);
    };

    let path = match result {
        Ok(artifact) => store.save(artifact),
        Err(_) if save_errors => store.save_rendered(kind, result),
        Err(_) => return Ok(None),
    }
    .with_context(|| format!("Failed to save {}", kind))?;

    tracing::info!("Saved {} to {}", kind, path.display());
    Ok(Some(path))
}

fn print_artifact(heading: &str, result: &ArtifactResult, saved_to: Option<&Path>) {
    println!("== {} ==", heading);
    match result {
        Ok(artifact) => {
            println!("{}", artifact.text);
            println!();
            if artifact.kind == ArtifactKind::Summary {
                println!("Word count: {}", artifact.word_count());
            }
        }
        Err(err) => println!("{}", err),
    }
    if let Some(path) = saved_to {
        println!("Saved to {}", path.display());
    }
}
