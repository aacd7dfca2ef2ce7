// Out-of-process oracle backed by the `look` utility
//
// `look` prints every line of a sorted word list that starts with the given
// string. That is a prefix search, so the output is filtered for an exact
// case-folded match before a word counts as known.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::speller::{Oracle, OracleError};

/// Program name used when none is configured.
pub const DEFAULT_LOOK_PROGRAM: &str = "look";

/// `look` exit status meaning "no line matched".
const LOOK_NOT_FOUND: i32 = 1;

/// Oracle that runs `look -f <word> [dictionary]` once per query.
#[derive(Debug, Clone)]
pub struct LookOracle {
    program: String,
    dictionary: Option<PathBuf>,
}

impl Default for LookOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl LookOracle {
    /// Use `look` from `PATH` with its built-in dictionary.
    pub fn new() -> Self {
        Self {
            program: DEFAULT_LOOK_PROGRAM.to_string(),
            dictionary: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Search this word list instead of the system default.
    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = Some(path.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, word: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-f").arg(word);
        if let Some(dict) = &self.dictionary {
            cmd.arg(dict);
        }
        cmd
    }
}

impl Oracle for LookOracle {
    fn contains(&self, word: &str) -> Result<bool, OracleError> {
        debug!(program = %self.program, word, "querying look");
        let output = self
            .command(word)
            .output()
            .map_err(|source| OracleError::Unavailable {
                program: self.program.clone(),
                source,
            })?;

        match output.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout)
                .lines()
                .any(|line| line.trim().eq_ignore_ascii_case(word))),
            Some(LOOK_NOT_FOUND) => Ok(false),
            _ => Err(OracleError::Invocation {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
        }
    }
}
