use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use imprint_core::models::response::ResponseSet;
use imprint_instruments::definition::Definition;
use imprint_instruments::{Instrument, all_instruments, require_instrument};

mod cli;
mod config;

use cli::{Cli, Commands, OutputFormat};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const SAFETY_FLAG: i32 = 2;
}

#[derive(Serialize)]
struct InstrumentSummary<'a> {
    id: &'a str,
    name: &'a str,
    questions: usize,
    dual_rater: bool,
}

#[derive(Serialize)]
struct InstrumentDetail<'a> {
    id: &'a str,
    name: &'a str,
    definition: &'a Definition,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let code = run(cli)?;
    if code != exit_code::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}

fn run(cli: Cli) -> eyre::Result<i32> {
    let config = config::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List => {
            let instruments = all_instruments();
            let summaries: Vec<InstrumentSummary> = instruments
                .iter()
                .map(|i| InstrumentSummary {
                    id: i.id(),
                    name: i.name(),
                    questions: i.definition().questions.len(),
                    dual_rater: i.definition().dual_rater.is_some(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            Ok(exit_code::SUCCESS)
        }
        Commands::Show(cmd) => {
            let instrument = require_instrument(&cmd.instrument)?;
            let detail = InstrumentDetail {
                id: instrument.id(),
                name: instrument.name(),
                definition: instrument.definition(),
            };
            println!("{}", serde_json::to_string_pretty(&detail)?);
            Ok(exit_code::SUCCESS)
        }
        Commands::Score(cmd) => {
            let instrument = require_instrument(&cmd.instrument)?;
            let options = config.options_for(instrument.id());
            let first = read_responses(&cmd.responses)?;

            if cmd.require_complete {
                ensure_complete(instrument.as_ref(), &first, &cmd.responses)?;
            }

            let report = match &cmd.second_rater {
                Some(path) => {
                    let second = read_responses(path)?;
                    if cmd.require_complete {
                        ensure_complete(instrument.as_ref(), &second, path)?;
                    }
                    instrument.score_dual(&first, &second, &options)?
                }
                None => match instrument.score(&first, &options) {
                    Ok(report) => report,
                    Err(err) => {
                        // Invalid answers elsewhere must not swallow a raised flag.
                        if let Some(flag) = err.safety_flag().filter(|f| f.flagged) {
                            println!("{}", serde_json::to_string_pretty(flag)?);
                            eprintln!("error: {err}");
                            return Ok(exit_code::SAFETY_FLAG);
                        }
                        return Err(err.into());
                    }
                },
            };

            match cmd.format {
                OutputFormat::Json => println!("{}", report.to_json_pretty()?),
                OutputFormat::Text => print!("{}", instrument.to_structured_summary(&report)),
            }
            Ok(exit_code::SUCCESS)
        }
        Commands::Safety(cmd) => {
            let instrument = require_instrument(&cmd.instrument)?;
            let responses = read_responses(&cmd.responses)?;
            let options = config.options_for(instrument.id());
            let flag = imprint_instruments::engine::screen(instrument.as_ref(), &responses, &options)
                .ok_or_else(|| eyre::eyre!("instrument '{}' has no safety screen", instrument.id()))?;

            println!("{}", serde_json::to_string_pretty(&flag)?);
            Ok(if flag.flagged {
                exit_code::SAFETY_FLAG
            } else {
                exit_code::SUCCESS
            })
        }
    }
}

fn read_responses(path: &Path) -> eyre::Result<ResponseSet> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read responses at {}: {e}", path.display()))?;
    let responses = ResponseSet::from_json(&contents)
        .map_err(|e| eyre::eyre!("invalid responses in {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), answers = responses.len(), "responses loaded");
    Ok(responses)
}

fn ensure_complete(instrument: &dyn Instrument, responses: &ResponseSet, path: &Path) -> eyre::Result<()> {
    let missing = instrument.missing_questions(responses);
    if missing.is_empty() {
        return Ok(());
    }
    Err(eyre::eyre!(
        "{} is missing {} of {} answers (first: {})",
        path.display(),
        missing.len(),
        instrument.definition().questions.len(),
        missing[0]
    ))
}
