//! Interactive shell.

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::info;
use trophy_core::{InMemoryTrophyRepository, TrophyRepository};
use trophy_shared::time::{now_jst, to_jst_rfc3339};

use crate::{
    cli::{ShellCommand, ShellLine},
    error::CliError,
    handler::{execute, render},
};

const PROMPT: &str = "trophy> ";

/// What the shell should do after handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print command output
    Print(String),
    /// Print an error and keep going
    Failed(String),
    /// Leave the shell
    Exit,
    /// Blank line
    Nothing,
}

/// Interactive shell owning the repository for the whole session
pub struct Shell {
    repository: InMemoryTrophyRepository,
    json: bool,
}

impl Shell {
    pub fn new(repository: InMemoryTrophyRepository, json: bool) -> Self {
        Self { repository, json }
    }

    pub fn repository(&self) -> &InMemoryTrophyRepository {
        &self.repository
    }

    /// Parse and run one line of input.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        if line.trim().is_empty() {
            return LineOutcome::Nothing;
        }

        let command = match ShellLine::parse_line(line) {
            Ok(ShellCommand::Exit) => return LineOutcome::Exit,
            Ok(ShellCommand::Trophy(command)) => command,
            // Also covers `help`, which clap reports as an error carrying the help text
            Err(e) => return LineOutcome::Failed(e.to_string().trim_end().to_string()),
        };

        let rendered = execute(&mut self.repository, &command)
            .and_then(|output| render(&output, self.json));
        match rendered {
            Ok(text) => LineOutcome::Print(text),
            Err(e) => LineOutcome::Failed(format!("Error: {e}")),
        }
    }

    /// Read lines until `exit`, Ctrl-C or Ctrl-D.
    pub fn run(&mut self) -> Result<(), CliError> {
        let mut editor = DefaultEditor::new()?;
        info!(
            started_at = %to_jst_rfc3339(now_jst()),
            trophies = self.repository.len(),
            "interactive shell started"
        );
        println!(
            "Trophy Manager ({} trophies loaded). Type `help` for commands, `exit` to quit.",
            self.repository.len()
        );

        loop {
            let line = match editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            if !line.trim().is_empty() {
                editor.add_history_entry(line.as_str())?;
            }

            match self.handle_line(&line) {
                LineOutcome::Print(text) => println!("{text}"),
                LineOutcome::Failed(text) => eprintln!("{text}"),
                LineOutcome::Exit => break,
                LineOutcome::Nothing => {}
            }
        }

        info!("interactive shell finished");
        Ok(())
    }
}
