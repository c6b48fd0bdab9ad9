//! Command line interface and the headless subcommands.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::api::{ApiClient, StudyResponse};
use crate::config::Config;
use crate::markdown::{prepare_summary, science_notation, strip_asterisks};
use crate::quiz::choice_label;
use crate::upload::select_pdf;

#[derive(Debug, Parser)]
#[command(name = "studyspark", version)]
#[command(about = "Summaries and practice quizzes from your PDF notes")]
pub struct Cli {
    /// Config file (default: <config dir>/studyspark/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Study service base URL, overrides config and STUDYSPARK_API_BASE_URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_base: Option<String>,

    /// Without a command the interactive UI starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print the summary of a PDF
    Summarize {
        file: PathBuf,

        /// Print the summary exactly as the service returned it
        #[arg(long)]
        raw: bool,
    },

    /// Print the summary and quiz for a PDF
    Study { file: PathBuf },

    /// Check that the study service is reachable
    Health,
}

impl Cli {
    /// Loads config, then applies the environment and `--api-base`.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Config::load_from(path)?
            }
            None => Config::load()?,
        };

        config.apply_env_overrides();
        if let Some(base) = &self.api_base {
            config.override_base_url(base);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Runs a headless subcommand, printing results to stdout.
pub fn run_command(command: Command, config: &Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = ApiClient::new(&config.api)?;
    let mut out = io::stdout().lock();

    match command {
        Command::Summarize { file, raw } => {
            check_file(&file, config)?;
            let response = runtime.block_on(client.summarize(&file))?;
            let text = if raw {
                response.summary
            } else {
                prepare_summary(&response.summary, true)
            };
            writeln!(out, "{}", text)?;
        }
        Command::Study { file } => {
            check_file(&file, config)?;
            let response = runtime.block_on(client.study(&file))?;
            write_study(&mut out, &response)?;
        }
        Command::Health => {
            let health = runtime.block_on(client.health())?;
            writeln!(out, "{} ({})", health.status, client.base_url())?;
        }
    }

    Ok(())
}

fn check_file(file: &Path, config: &Config) -> anyhow::Result<()> {
    select_pdf(&file.to_string_lossy(), config.upload.max_file_size_bytes())?;
    Ok(())
}

/// Summary followed by numbered questions with the key marked.
pub fn write_study(out: &mut impl Write, response: &StudyResponse) -> io::Result<()> {
    writeln!(out, "{}", prepare_summary(&response.summary, false))?;
    writeln!(out)?;
    writeln!(out, "## Quiz ({} questions)", response.quiz.len())?;

    for (n, question) in response.quiz.iter().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "{}. {}",
            n + 1,
            science_notation(&strip_asterisks(&question.question))
        )?;
        for (i, choice) in question.choices.iter().enumerate() {
            let marker = if i == question.answer_index { "*" } else { " " };
            writeln!(
                out,
                "  {} {}. {}",
                marker,
                choice_label(i),
                science_notation(&strip_asterisks(choice))
            )?;
        }
    }
    Ok(())
}
