//! Resume ranker: rank resumes against a job description by TF-IDF similarity

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_ranker::cli::{Cli, Commands, ConfigAction};
use resume_ranker::config::{Config, OutputFormat};
use resume_ranker::error::{Result, ResumeRankerError};
use resume_ranker::input::{InputManager, LoadedDocument};
use resume_ranker::output::{
    parse_output_format, save_report_to_file, ReportGenerator, SkippedFile, StoredRecordsView,
};
use resume_ranker::pipeline::{self, SaveOutcome};
use resume_ranker::processing::Ranker;
use resume_ranker::store::{JsonFileStore, RecordStore};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    let generator = ReportGenerator::from_config(&config.output);

    match command {
        Commands::Rank {
            resumes,
            job,
            job_text,
            output,
            save,
            no_save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let mut input_manager = InputManager::new();

            let job_description = match (job, job_text) {
                (_, Some(text)) => text,
                (Some(path), None) => {
                    eprintln!("💼 Reading job description: {}", path.display());
                    input_manager.extract_text(&path).await?
                }
                (None, None) => {
                    return Err(ResumeRankerError::InvalidInput(
                        "A job description is required".to_string(),
                    ))
                }
            };

            let (documents, skipped) = load_resumes(&mut input_manager, &resumes).await?;
            if documents.is_empty() {
                return Err(ResumeRankerError::InvalidInput(
                    "None of the resume files could be read".to_string(),
                ));
            }

            let ranker = Ranker::new(config.ranking.clone());
            let report = pipeline::rank_documents(&ranker, &job_description, &documents, skipped)?;

            eprintln!("✅ Resumes ranked successfully");
            let rendered = generator.generate_ranking(&report, format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                save_report_to_file(&rendered, &save_path)?;
                eprintln!("📁 Ranking saved to {}", save_path.display());
            }

            if no_save {
                info!("Skipping storage (--no-save)");
                return Ok(());
            }

            eprintln!("💾 Saving to database...");
            let mut store = open_store(&config)?;
            for outcome in pipeline::store_results(&mut store, &report, &documents)? {
                match outcome {
                    SaveOutcome::Inserted { name } => eprintln!("✅ Inserted: `{}`", name),
                    SaveOutcome::Duplicate {
                        name,
                        existing_score,
                    } => {
                        eprintln!("⚠️  `{}` already exists.", name);
                        eprintln!("📝 Existing Score: {:.4}", existing_score);
                    }
                }
            }
        }

        Commands::List { output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let store = open_store(&config)?;
            let records = store.find_all_sorted_by_score()?;
            let view = StoredRecordsView::from_records(&records, config.output.preview_length);
            println!("{}", generator.generate_records(&view, format)?);
        }

        Commands::Names => {
            let store = open_store(&config)?;
            let names = store.names()?;
            if names.is_empty() {
                println!("No resumes found in database.");
            }
            for name in names {
                println!("{}", name);
            }
        }

        Commands::Delete { name } => {
            let mut store = open_store(&config)?;
            if store.delete_by_name(&name)? {
                println!("✅ `{}` deleted.", name);
            } else {
                let err = ResumeRankerError::RecordNotFound(name);
                warn!("{}", err);
                println!("❌ {}", err);
            }
        }

        Commands::Clear { yes } => {
            if !yes {
                println!("⚠️  This will permanently remove all resumes from the database.");
                println!("💡 Re-run with --yes to confirm.");
                return Ok(());
            }
            let mut store = open_store(&config)?;
            let deleted = store.delete_all()?;
            println!("🗑️  Deleted {} resumes.", deleted);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config File: {}", config_path.display());
                println!("Store File: {}", config.store_path().display());
                println!("\nRanking:");
                println!("  Tokenizer: {:?}", config.ranking.tokenizer);
                println!("  Lowercase: {}", config.ranking.lowercase);
                println!("  Stop words removed: {}", config.ranking.remove_stop_words);
                println!("  Sublinear TF: {}", config.ranking.sublinear_tf);
                println!("  Smooth IDF: {}", config.ranking.smooth_idf);
                println!("  L2 normalize: {}", config.ranking.normalize);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Colors: {}", config.output.color_output);
                println!("  Preview length: {}", config.output.preview_length);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(name) => parse_output_format(name),
        None => Ok(config.output.format),
    }
}

fn open_store(config: &Config) -> Result<JsonFileStore> {
    JsonFileStore::open(config.store_path())
}

/// Load every resume, turning unreadable or unsupported files into warnings
async fn load_resumes(
    input_manager: &mut InputManager,
    paths: &[PathBuf],
) -> Result<(Vec<LoadedDocument>, Vec<SkippedFile>)> {
    let progress = ProgressBar::new(paths.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/dim}] {pos}/{len} {msg}") {
        progress.set_style(style.progress_chars("━━╸"));
    }

    let mut documents = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();

    for path in paths {
        progress.set_message(path.display().to_string());
        match input_manager.load(path).await {
            Ok(document) => documents.push(document),
            Err(e) if e.is_recoverable() => {
                warn!("Skipping {}: {}", path.display(), e);
                skipped.push(SkippedFile {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                progress.finish_and_clear();
                return Err(e);
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok((documents, skipped))
}
