//! Summary and follow-up email generation
//!
//! Turns a transcript into a summary, then the summary into an email draft.
//! Failures are carried as typed results instead of error-looking text.

mod artifact;
mod report;
mod runner;

pub use artifact::{render_artifact, ArtifactKind, ArtifactResult, GeneratedArtifact, GenerationError};
pub use report::{ArtifactReport, RunReport};
pub use runner::{EmailOutcome, Pipeline, PipelineOutput, SummaryFailurePolicy};
