use anyhow::Context;
use clap::Parser;
use filemod_cli::config::{AppConfig, ConfigManager};
use filemod_cli::error::{CliError, CliResult, ErrorContext, ExitCode};
use filemod_cli::prompt::{DialoguerPrompter, LinePrompter};
use filemod_cli::session::{Session, local_now};
use filemod_cli::{render, terminal};
use filemod_core::FileManager;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "filemod")]
#[command(author, version, about = "Validate, preview and annotate text files", long_about = None)]
struct Cli {
    /// Process this file once without prompting, then exit
    path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the one-shot report as JSON
    #[arg(long, requires = "path")]
    json: bool,

    /// Print the effective configuration and exit
    #[arg(long, conflicts_with = "path")]
    print_config: bool,
}

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::Misuse.into()
            } else {
                ExitCode::Success.into()
            };
        }
    };

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("filemod_core", log::LevelFilter::Debug)
            .filter_module("filemod_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprint!("{}", err.format_for_user(cli.debug));
            err.exit_code().into()
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = manager.load().map_err(|err| {
        CliError::from(err)
            .with_context("config", &manager.config_path().display().to_string())
            .with_suggestion("Fix or remove the configuration file")
    })?;

    if cli.no_color || !config.output.color_enabled || !terminal::supports_ansi() {
        colored::control::set_override(false);
    }

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let file_manager = FileManager::new();
    match &cli.path {
        Some(path) => process_once(&file_manager, path, cli.json),
        None => interactive(&file_manager, &config),
    }
}

fn process_once(manager: &FileManager, path: &Path, json: bool) -> CliResult<()> {
    log::debug!("Processing {} without prompting", path.display());
    let report = manager.process(path, local_now())?;

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .context("Failed to serialize report")?;
        println!("{rendered}");
    } else {
        println!("{}", render::report_text(&report));
    }
    Ok(())
}

fn interactive(manager: &FileManager, config: &AppConfig) -> CliResult<()> {
    let stdout = io::stdout();

    if terminal::can_prompt_interactively() {
        log::debug!("Using terminal prompts");
        Session::new(manager, config, DialoguerPrompter, stdout.lock()).run()?;
    } else {
        log::debug!("Reading answers from stdin");
        let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        Session::new(manager, config, prompter, stdout.lock()).run()?;
    }
    Ok(())
}
