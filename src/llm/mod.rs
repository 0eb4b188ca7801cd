//! LLM module for recap
//!
//! Prompt templates and the text-generation client (Gemini API).

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, LlmProvider};
pub use gemini::GeminiClient;
pub use prompts::{build_email_prompt, build_summary_prompt};
