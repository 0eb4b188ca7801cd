//! Transcript -> summary -> email orchestration

use serde::{Deserialize, Serialize};

use crate::llm::{build_email_prompt, build_summary_prompt, LlmProvider};
use crate::pipeline::artifact::{ArtifactKind, ArtifactResult, GeneratedArtifact, GenerationError};

/// What to do with the email step once the summary step has failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFailurePolicy {
    /// Do not attempt the email
    #[default]
    Skip,
    /// Draft the email from the summary error line anyway
    Continue,
}

/// Outcome of the email step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailOutcome {
    Generated(ArtifactResult),
    /// Not attempted because the summary failed
    Skipped,
}

impl EmailOutcome {
    pub fn result(&self) -> Option<&ArtifactResult> {
        match self {
            Self::Generated(result) => Some(result),
            Self::Skipped => None,
        }
    }
}

/// Both results of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub summary: ArtifactResult,
    pub email: EmailOutcome,
}

impl PipelineOutput {
    /// True when both artifacts were generated
    pub fn is_complete(&self) -> bool {
        self.summary.is_ok() && matches!(self.email, EmailOutcome::Generated(Ok(_)))
    }
}

/// Runs the two generation steps against an injected provider.
///
/// Holds no state between runs.
pub struct Pipeline<'a> {
    provider: &'a dyn LlmProvider,
    on_summary_failure: SummaryFailurePolicy,
}

impl<'a> Pipeline<'a> {
    pub fn new(provider: &'a dyn LlmProvider) -> Self {
        Self {
            provider,
            on_summary_failure: SummaryFailurePolicy::default(),
        }
    }

    pub fn with_summary_failure_policy(mut self, policy: SummaryFailurePolicy) -> Self {
        self.on_summary_failure = policy;
        self
    }

    /// Summarize a transcript.
    pub async fn summarize(&self, transcript: &str) -> ArtifactResult {
        tracing::info!(
            "Generating summary ({} transcript chars) via {}",
            transcript.chars().count(),
            self.provider.name()
        );
        self.generate(ArtifactKind::Summary, &build_summary_prompt(transcript))
            .await
    }

    /// Draft a follow-up email from summary text.
    pub async fn draft_email(&self, summary: &str) -> ArtifactResult {
        tracing::info!("Generating follow-up email via {}", self.provider.name());
        self.generate(ArtifactKind::Email, &build_email_prompt(summary))
            .await
    }

    /// Summarize, then draft the email from whatever the summary step returned.
    pub async fn run(&self, transcript: &str) -> PipelineOutput {
        let summary = self.summarize(transcript).await;

        let email = match (&summary, self.on_summary_failure) {
            (Ok(artifact), _) => EmailOutcome::Generated(self.draft_email(&artifact.text).await),
            (Err(err), SummaryFailurePolicy::Continue) => {
                tracing::warn!("Summary failed; drafting email from the error text");
                EmailOutcome::Generated(self.draft_email(&err.to_string()).await)
            }
            (Err(_), SummaryFailurePolicy::Skip) => {
                tracing::warn!("Summary failed; skipping email draft");
                EmailOutcome::Skipped
            }
        };

        PipelineOutput { summary, email }
    }

    async fn generate(&self, kind: ArtifactKind, prompt: &str) -> ArtifactResult {
        match self.provider.generate(prompt).await {
            Ok(text) => {
                let artifact = GeneratedArtifact::new(kind, text.trim());
                tracing::debug!("{} generated: {} words", kind, artifact.word_count());
                Ok(artifact)
            }
            Err(err) => {
                let err = GenerationError::from_provider(kind, &err);
                tracing::warn!("{}", err);
                Err(err)
            }
        }
    }
}
