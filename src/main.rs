use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use playbill::cli::{Cli, Commands, CommonArgs};
use playbill::config::{Config, OutputFormat};
use playbill::event::{annotate_events, events_to_json, read_events};
use playbill::summary::write_summary;
use playbill::{infer_names, NameDictionary, TeamRoster};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    playbill::init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?.with_env_overrides(),
        None => Config::load()?,
    };

    match cli.command {
        Commands::Infer { text, file, common } => {
            let description = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_source(&path)?,
                (None, None) => read_source(Path::new("-"))?,
            };
            let dictionary = load_dictionary(&common, &config)?;
            let names = infer_names(&description, &dictionary);
            if wants_json(&common, &config) {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
        }
        Commands::Events { source, teams, common } => {
            let dictionary = load_dictionary(&common, &config)?;
            let roster = match teams.or_else(|| config.teams.path.clone()) {
                Some(path) => Some(
                    TeamRoster::load(&path)?.with_min_name_len(config.teams.min_name_len),
                ),
                None => None,
            };

            let raw = read_source(&source)?;
            let mut events = read_events(raw.as_bytes())
                .with_context(|| format!("Failed to parse events from {}", source.display()))?;
            info!("Read {} event(s) from {}", events.len(), source.display());

            annotate_events(&mut events, &dictionary, roster.as_ref());

            if wants_json(&common, &config) {
                println!("{}", events_to_json(&events)?);
            } else {
                write_summary(&mut io::stdout().lock(), &events)?;
            }
        }
    }
    Ok(())
}

fn load_dictionary(common: &CommonArgs, config: &Config) -> Result<NameDictionary> {
    let path: Option<PathBuf> = common.names.clone().or_else(|| config.dictionary.path.clone());
    Ok(NameDictionary::load(path.as_deref())?)
}

fn wants_json(common: &CommonArgs, config: &Config) -> bool {
    common.json || config.output.format == OutputFormat::Json
}

/// Read a whole file, or stdin for '-'
fn read_source(path: &Path) -> Result<String> {
    let mut content = String::new();
    if path == Path::new("-") {
        info!("Reading from stdin");
        io::stdin().read_to_string(&mut content).context("Failed to read stdin")?;
    } else {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        BufReader::new(file)
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }
    Ok(content)
}
