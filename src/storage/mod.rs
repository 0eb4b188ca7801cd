//! Storage module for recap
//!
//! Reads transcripts and writes generated artifacts as flat text files.

mod artifacts;
mod input;

pub use artifacts::ArtifactStore;
pub use input::{read_input, STDIN_PATH};
