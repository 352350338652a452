//! Command-line front end.
//!
//! A thin shell over the library: it parses arguments, builds the
//! [`AppState`](ayah::AppState) through [`ayah::initialize`], spawns the
//! translation worker when a command needs the network, and turns each
//! subcommand into a short sequence of [`Event`]s.
//!
//! # Commands
//!
//! - `ayah list [--query Q] [--desc]`: chapter list
//! - `ayah read <CHAPTER> [--translator ID]`: verses with a translation
//! - `ayah translators`: translator editions offered by the API
//! - `ayah play <CHAPTER> [--reciter N]`: the audio URLs recited, in order
//!
//! Audio is not played here. `play` prints each URL and reports it finished
//! straight away, which walks the sequencer through the chapter.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use ayah::app::Driver;
use ayah::domain::RECITERS;
use ayah::translation::HttpTranslationClient;
use ayah::ui::render;
use ayah::worker::WorkerHandle;
use ayah::{Action, AyahError, Config, Event, Result, Theme};

/// How long to wait for one translation API response.
const WORKER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Parser)]
#[command(name = "ayah", version, about = "Read, search and recite the Quran from the terminal")]
struct Cli {
    /// Config file (default: ~/.config/ayah/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Chapter data file, overriding the config
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Use the dark theme
    #[arg(long, global = true)]
    dark: bool,

    /// Override a config key, e.g. --set translator_language=en
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List chapters, optionally filtered by name
    List {
        /// Case-insensitive search over Arabic name and transliteration
        #[arg(short, long, default_value = "")]
        query: String,

        /// Order from 114 down to 1
        #[arg(long)]
        desc: bool,
    },

    /// Show a chapter's verses with a translation
    Read {
        /// Chapter number (1-114)
        chapter: u32,

        /// Translator edition identifier (default: first offered)
        #[arg(short, long)]
        translator: Option<String>,
    },

    /// List translator editions
    Translators,

    /// Print the audio URLs a recitation of the chapter plays
    Play {
        /// Chapter number (1-114)
        chapter: u32,

        /// Reciter number
        #[arg(short, long, default_value_t = 1)]
        reciter: u32,
    },
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .filter(|&c| c > 0)
        .unwrap_or(80)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    let overrides: BTreeMap<String, String> = cli.overrides.iter().cloned().collect();
    config.apply_overrides(&overrides)?;

    if let Some(data) = &cli.data {
        config.data_file.clone_from(data);
    }
    Ok(config)
}

fn spawn_worker(config: &Config) -> Result<WorkerHandle> {
    WorkerHandle::spawn(HttpTranslationClient::from_config(config)?)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    ayah::observability::init_tracing(&config);

    let _span = tracing::debug_span!("run", command = ?cli.command).entered();

    let mut state = ayah::initialize(&config);
    if cli.dark {
        state.theme = Theme::dark();
    }

    if state.content.is_empty() {
        eprintln!("No chapters loaded from {}", config.data_file.display());
    }

    let cols = terminal_width();

    match cli.command {
        Command::List { query, desc } => {
            let mut driver = Driver::new(state, None);
            driver.dispatch(&Event::QueryChanged(query))?;
            if desc {
                driver.dispatch(&Event::ToggleSort)?;
            }
            render(driver.state(), cols);
        }
        Command::Read { chapter, translator } => {
            let mut driver = Driver::new(state, Some(spawn_worker(&config)?));
            driver.dispatch(&Event::OpenChapter(chapter))?;
            driver.settle(WORKER_TIMEOUT)?;

            if let Some(translator) = translator {
                if !driver.state().translators.iter().any(|t| t.identifier == translator) {
                    eprintln!("Unknown translator {translator:?}; run `ayah translators` to list them");
                }
                driver.dispatch(&Event::SelectTranslator(translator))?;
                driver.settle(WORKER_TIMEOUT)?;
            }

            render(driver.state(), cols);
        }
        Command::Translators => {
            let mut driver = Driver::new(state, Some(spawn_worker(&config)?));
            driver.dispatch(&Event::LoadTranslators)?;
            driver.settle(WORKER_TIMEOUT)?;

            let translators = &driver.state().translators;
            if translators.is_empty() {
                eprintln!("No translators available");
            }
            for translator in translators {
                println!("{}\t{}\t{}", translator.identifier, translator.name, translator.english_name);
            }
        }
        Command::Play { chapter, reciter } => {
            if !RECITERS.iter().any(|r| r.id == reciter) {
                return Err(AyahError::Config(format!(
                    "unknown reciter {reciter}; choose one of {}",
                    RECITERS.iter().map(|r| format!("{} ({})", r.id, r.name)).collect::<Vec<_>>().join(", ")
                )));
            }

            let mut driver = Driver::new(state, None);
            driver.dispatch(&Event::OpenChapter(chapter))?;
            driver.dispatch(&Event::SelectReciter(reciter))?;
            driver.dispatch(&Event::TogglePlayback)?;

            while let Some(action) = driver.next_audio() {
                match action {
                    Action::PlayAudio { url, verse_index } => {
                        println!("{}\t{url}", verse_index + 1);
                        driver.dispatch(&Event::AudioFinished)?;
                    }
                    Action::StopAudio => break,
                    Action::PostToWorker(_) => {}
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
