//! Generated artifacts and generation failures

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which of the two generation steps produced an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Summary,
    Email,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Email => "email",
        }
    }

    /// File name used when the artifact is saved to disk
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Summary => "summary.txt",
            Self::Email => "email_draft.txt",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text produced by one generation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub text: String,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters (Unicode scalar values)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// A failed generation step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error generating {kind}: {message}")]
pub struct GenerationError {
    pub kind: ArtifactKind,
    pub message: String,
}

impl GenerationError {
    pub fn new(kind: ArtifactKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Wrap a provider error, keeping its whole context chain in the message.
    pub fn from_provider(kind: ArtifactKind, err: &anyhow::Error) -> Self {
        Self::new(kind, format!("{:#}", err))
    }
}

pub type ArtifactResult = std::result::Result<GeneratedArtifact, GenerationError>;

/// Text for display or saving: the artifact itself, or the
/// `Error generating <kind>: <message>` line for a failure.
pub fn render_artifact(result: &ArtifactResult) -> String {
    match result {
        Ok(artifact) => artifact.text.clone(),
        Err(err) => err.to_string(),
    }
}
