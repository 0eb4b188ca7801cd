//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// recap - Meeting transcript summaries and follow-up email drafts
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a transcript, then draft a follow-up email from the summary
    Generate {
        /// Transcript text file ("-" reads stdin)
        transcript: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// Also save the error line when a step fails
        #[arg(long)]
        save_errors: bool,

        /// Draft the email even if the summary step failed
        #[arg(long)]
        continue_on_error: bool,

        /// Print a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Summarize a transcript
    Summarize {
        /// Transcript text file ("-" reads stdin)
        transcript: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// Print a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Draft a follow-up email from an existing summary
    Email {
        /// Summary text file ("-" reads stdin)
        summary: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check configuration and output directory
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where generated files go
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Directory for summary.txt and email_draft.txt (defaults to general.output_dir)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print results without writing any files
    #[arg(long, conflicts_with = "output_dir")]
    pub no_save: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration (API key redacted)
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
