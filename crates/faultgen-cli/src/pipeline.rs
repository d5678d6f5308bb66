//! Generation pipeline: load triggers, expand rows, write both outputs.
//!
//! Loading the trigger list is the only fatal stage. The workbook and the
//! comment file are written by separate emitters over the same rows; each
//! failure is recorded in the result and never stops the other emitter.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use faultgen_core::{
    ArtifactKind, RunTimestamp, TemplateGenerator, artifact_file_name, expand_rows, load_triggers,
};
use faultgen_output::{CsvOptions, OutputError, write_alarm_workbook, write_comment_csv};

/// Inputs of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Controller shortcut as defined in the HMI project.
    pub shortcut: String,
    /// Trigger list file.
    pub triggers: PathBuf,
    /// Directory receiving both outputs.
    pub output_dir: PathBuf,
    /// Logix import/export format version.
    pub format_version: String,
}

/// Outcome of one emitter.
#[derive(Debug)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub error: Option<OutputError>,
}

impl ArtifactOutcome {
    pub fn is_written(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug)]
pub struct GenerateResult {
    pub timestamp: RunTimestamp,
    pub trigger_count: usize,
    pub row_count: usize,
    pub artifacts: Vec<ArtifactOutcome>,
}

impl GenerateResult {
    pub fn has_errors(&self) -> bool {
        self.artifacts.iter().any(|artifact| !artifact.is_written())
    }
}

/// Run the pipeline stamped with the current local time.
pub fn run_generate(config: &GenerateConfig) -> Result<GenerateResult> {
    run_generate_at(config, RunTimestamp::now())
}

/// Run the pipeline with a fixed timestamp.
///
/// # Errors
///
/// Fails only when the trigger list cannot be loaded; no output is written
/// in that case.
pub fn run_generate_at(config: &GenerateConfig, timestamp: RunTimestamp) -> Result<GenerateResult> {
    let span = info_span!("generate", shortcut = %config.shortcut, %timestamp);
    let _guard = span.enter();

    let triggers = load_triggers(&config.triggers)
        .with_context(|| format!("failed to parse triggers from {}", config.triggers.display()))?;
    if triggers.is_empty() {
        warn!(path = %config.triggers.display(), "trigger list is empty");
    }

    let templates = TemplateGenerator::new(config.shortcut.as_str());
    let rows = expand_rows(&triggers, &templates);
    info!(
        trigger_count = triggers.len(),
        row_count = rows.len(),
        "expanded triggers"
    );

    let artifact_path = |kind| {
        config
            .output_dir
            .join(artifact_file_name(&config.shortcut, &timestamp, kind))
    };

    let workbook = emit(
        artifact_path(ArtifactKind::Spreadsheet),
        ArtifactKind::Spreadsheet,
        |path| write_alarm_workbook(path, &rows),
    );
    let csv_options = CsvOptions::new(timestamp.clone(), config.format_version.as_str());
    let comments = emit(artifact_path(ArtifactKind::Csv), ArtifactKind::Csv, |path| {
        write_comment_csv(path, &rows, &csv_options)
    });

    Ok(GenerateResult {
        timestamp,
        trigger_count: triggers.len(),
        row_count: rows.len(),
        artifacts: vec![workbook, comments],
    })
}

/// Run one emitter inside its own span and error boundary.
fn emit<F>(path: PathBuf, kind: ArtifactKind, write: F) -> ArtifactOutcome
where
    F: FnOnce(&Path) -> faultgen_output::Result<()>,
{
    let span = info_span!("emit", artifact = %kind);
    let _guard = span.enter();
    info!(path = %path.display(), "{kind} output");
    let start = Instant::now();
    let error = match write(&path) {
        Ok(()) => {
            info!(duration_ms = start.elapsed().as_millis(), "{kind} file created");
            None
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to create {kind} file");
            Some(err)
        }
    };
    ArtifactOutcome { kind, path, error }
}
