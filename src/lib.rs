//! recap - Meeting transcript summaries and follow-up email drafts
//!
//! Reads a transcript, asks a text-generation service for a summary, then
//! drafts a follow-up email from that summary.

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod storage;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
