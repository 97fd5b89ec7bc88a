//! CLI interface for the resume ranker

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Rank resumes against a job description")]
#[command(long_about = "Rank resumes by TF-IDF cosine similarity to a job description, store the results, and browse or delete stored resumes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank resumes against a job description and store the results
    #[command(group(ArgGroup::new("job_source").required(true).args(["job", "job_text"])))]
    Rank {
        /// Resume files (PDF, TXT, MD)
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(short = 't', long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the rendered ranking to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Rank only, do not store results
        #[arg(long)]
        no_save: bool,
    },

    /// Show stored resumes, highest score first
    List {
        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the names of stored resumes
    Names,

    /// Delete one stored resume by name
    Delete {
        /// Resume name as shown by `names`
        name: String,
    },

    /// Delete all stored resumes
    Clear {
        /// Confirm permanent removal of every stored resume
        #[arg(long)]
        yes: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}
