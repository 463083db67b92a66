//! Command execution and output rendering.
//!
//! Reads go straight to the repository; writes go through the use cases.

use tracing::debug;
use trophy_core::{
    SortCriterion, Trophy, TrophyId, TrophyRepository,
    usecase::{AddTrophyUseCase, RemoveTrophyUseCase, UpdateTrophyUseCase},
};

use crate::{cli::TrophyCommand, error::CliError};

/// Printed instead of an empty list
const NO_TROPHIES: &str = "(no trophies)";

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Zero or more trophies, in the order they should be shown
    Trophies(Vec<Trophy>),
    /// A single trophy (fetched, added, updated or removed)
    Trophy(Trophy),
}

/// Run `command` against `repository`.
pub fn execute(
    repository: &mut dyn TrophyRepository,
    command: &TrophyCommand,
) -> Result<CommandOutput, CliError> {
    debug!(?command, "executing command");

    let output = match command {
        TrophyCommand::List => CommandOutput::Trophies(repository.get().to_vec()),
        TrophyCommand::Filter { year } => {
            CommandOutput::Trophies(owned(repository.get_filtered_by_year(*year)))
        }
        TrophyCommand::Sort { criterion } => {
            if SortCriterion::parse(criterion).is_none() {
                debug!(%criterion, "unknown sort criterion, keeping current order");
            }
            CommandOutput::Trophies(owned(repository.get_sorted(criterion)))
        }
        TrophyCommand::Get { id } => {
            CommandOutput::Trophy(repository.get_by_id(TrophyId::new(*id))?.clone())
        }
        TrophyCommand::Add {
            id,
            year,
            competition,
        } => CommandOutput::Trophy(AddTrophyUseCase::new(repository).execute(
            *id,
            competition.join(" "),
            *year,
        )?),
        TrophyCommand::Remove { id } => {
            CommandOutput::Trophy(RemoveTrophyUseCase::new(repository).execute(*id)?)
        }
        TrophyCommand::Update {
            id,
            year,
            competition,
        } => CommandOutput::Trophy(UpdateTrophyUseCase::new(repository).execute(
            *id,
            competition.join(" "),
            *year,
        )?),
    };

    Ok(output)
}

/// Render `output` as text (one trophy per line) or as pretty JSON.
pub fn render(output: &CommandOutput, json: bool) -> Result<String, CliError> {
    let rendered = match (output, json) {
        (CommandOutput::Trophies(trophies), true) => serde_json::to_string_pretty(trophies)?,
        (CommandOutput::Trophy(trophy), true) => serde_json::to_string_pretty(trophy)?,
        (CommandOutput::Trophies(trophies), false) if trophies.is_empty() => {
            NO_TROPHIES.to_string()
        }
        (CommandOutput::Trophies(trophies), false) => trophies
            .iter()
            .map(Trophy::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        (CommandOutput::Trophy(trophy), false) => trophy.to_string(),
    };

    Ok(rendered)
}

fn owned(trophies: Vec<&Trophy>) -> Vec<Trophy> {
    trophies.into_iter().cloned().collect()
}
