//! JSON-friendly view of a pipeline run

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::pipeline::artifact::ArtifactResult;
use crate::pipeline::runner::{EmailOutcome, PipelineOutput};

/// Status of a single artifact in a run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ArtifactReport {
    Ok {
        text: String,
        word_count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        saved_to: Option<PathBuf>,
    },
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        saved_to: Option<PathBuf>,
    },
    Skipped,
}

impl ArtifactReport {
    /// Record where the artifact was written. No-op for skipped steps.
    pub fn saved_to(mut self, path: Option<&Path>) -> Self {
        match &mut self {
            Self::Ok { saved_to, .. } | Self::Error { saved_to, .. } => {
                *saved_to = path.map(Path::to_path_buf);
            }
            Self::Skipped => {}
        }
        self
    }
}

impl From<&ArtifactResult> for ArtifactReport {
    fn from(result: &ArtifactResult) -> Self {
        match result {
            Ok(artifact) => Self::Ok {
                text: artifact.text.clone(),
                word_count: artifact.word_count(),
                saved_to: None,
            },
            Err(err) => Self::Error {
                message: err.to_string(),
                saved_to: None,
            },
        }
    }
}

impl From<&EmailOutcome> for ArtifactReport {
    fn from(outcome: &EmailOutcome) -> Self {
        match outcome {
            EmailOutcome::Generated(result) => Self::from(result),
            EmailOutcome::Skipped => Self::Skipped,
        }
    }
}

/// Serializable summary of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub transcript_chars: usize,
    pub generated_at: DateTime<Utc>,
    pub summary: ArtifactReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<ArtifactReport>,
}

impl RunReport {
    pub fn from_output(transcript: &str, output: &PipelineOutput) -> Self {
        Self {
            transcript_chars: transcript.chars().count(),
            generated_at: Utc::now(),
            summary: ArtifactReport::from(&output.summary),
            email: Some(ArtifactReport::from(&output.email)),
        }
    }

    /// Report for a summary-only run
    pub fn from_summary(transcript: &str, summary: &ArtifactResult) -> Self {
        Self {
            transcript_chars: transcript.chars().count(),
            generated_at: Utc::now(),
            summary: ArtifactReport::from(summary),
            email: None,
        }
    }

    /// Attach the saved file paths to the summary and email entries.
    pub fn with_saved_paths(mut self, summary: Option<&Path>, email: Option<&Path>) -> Self {
        self.summary = self.summary.saved_to(summary);
        self.email = self.email.map(|report| report.saved_to(email));
        self
    }
}
