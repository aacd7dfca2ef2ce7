// identspell-cli: shared plumbing for the command-line tools.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use identspell_core::word::Word;
use identspell_en::handle::{IdentSpellError, IdentSpellHandle};
use identspell_en::speller::look::LookOracle;
use tracing::{debug, info, warn};

/// Word lists tried after `--dict` / `IDENTSPELL_DICT`.
const SYSTEM_WORD_LISTS: &[&str] = &["/usr/share/dict/words", "/usr/dict/words"];

/// Bytes inspected when deciding whether a file is binary.
const BINARY_SNIFF_LEN: usize = 8000;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find a word list in any of the search paths:\n{}", format_paths(.searched))]
    NoDictionary { searched: Vec<PathBuf> },

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),

    #[error(transparent)]
    Spell(#[from] IdentSpellError),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flag likely-misspelled words inside identifiers.
#[derive(Parser, Debug, Clone)]
#[command(name = "identspell", version, about)]
pub struct Args {
    /// Files or directories to check. Directories are walked recursively.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Word list with one entry per line.
    #[arg(short, long, value_name = "FILE", env = "IDENTSPELL_DICT")]
    pub dict: Option<PathBuf>,

    /// Ask the `look` utility instead of loading a word list into memory.
    #[arg(long)]
    pub look: bool,

    /// Program to run for `--look`.
    #[arg(long, value_name = "NAME", default_value = "look")]
    pub look_program: String,

    /// Do not memoize dictionary lookups.
    #[arg(long)]
    pub no_cache: bool,

    /// Descend into directories whose names start with a dot.
    #[arg(long)]
    pub include_hidden: bool,

    /// Exit with status 1 when any word was flagged.
    #[arg(long)]
    pub fail_on_unknown: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Install a stderr tracing subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the list of word list files to try, in order.
pub fn build_search_paths(dict: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = dict {
        paths.push(p.to_path_buf());
    }
    paths.extend(SYSTEM_WORD_LISTS.iter().map(PathBuf::from));
    paths
}

/// First existing word list among the search paths.
pub fn find_word_list(dict: Option<&Path>) -> Result<PathBuf, CliError> {
    let searched = build_search_paths(dict);
    match searched.iter().find(|p| p.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(CliError::NoDictionary { searched }),
    }
}

/// Create a handle according to the command-line options.
pub fn load_handle(args: &Args) -> Result<IdentSpellHandle, CliError> {
    let mut handle = if args.look {
        let mut oracle = LookOracle::new().with_program(&args.look_program);
        if let Some(dict) = &args.dict {
            oracle = oracle.with_dictionary(dict);
        }
        info!(program = oracle.program(), "using look oracle");
        IdentSpellHandle::with_look(oracle)
    } else {
        let path = find_word_list(args.dict.as_deref())?;
        info!(path = %path.display(), "using word list");
        IdentSpellHandle::from_word_list_path(&path)?
    };
    handle.set_cache_enabled(!args.no_cache);
    Ok(handle)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Expand a path into the files to check.
///
/// A file yields itself. A directory yields every file beneath it, sorted by
/// path; hidden entries are skipped unless `include_hidden` is set.
/// Symlinked directories below `path` are not followed. A path that does not
/// exist is an error.
pub fn collect_file_paths(path: &Path, include_hidden: bool) -> Result<Vec<PathBuf>, CliError> {
    if !path.exists() {
        return Err(CliError::PathNotFound(path.to_path_buf()));
    }
    let mut files = Vec::new();
    walk(path, include_hidden, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(path: &Path, include_hidden: bool, files: &mut Vec<PathBuf>) -> Result<(), CliError> {
    if !path.is_dir() {
        files.push(path.to_path_buf());
        return Ok(());
    }
    let entries = fs::read_dir(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let child = entry.path();
        if !include_hidden && is_hidden(&child) {
            debug!(path = %child.display(), "skipping hidden entry");
            continue;
        }
        let file_type = entry.file_type().map_err(|source| CliError::Io {
            path: child.clone(),
            source,
        })?;
        if file_type.is_symlink() && child.is_dir() {
            debug!(path = %child.display(), "skipping symlinked directory");
            continue;
        }
        walk(&child, include_hidden, files)?;
    }
    Ok(())
}

/// The line printed for a flagged word.
pub fn format_report(word: &Word) -> String {
    format!("Check \"{word}\".")
}

/// Check one file, writing a report line per flagged word.
///
/// Files that look binary are skipped. Returns the number of flagged words.
pub fn check_file<W: Write>(
    handle: &IdentSpellHandle,
    path: &Path,
    out: &mut W,
) -> Result<usize, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes[..bytes.len().min(BINARY_SNIFF_LEN)].contains(&0) {
        warn!(path = %path.display(), "skipping binary file");
        return Ok(0);
    }
    let text = String::from_utf8_lossy(&bytes);
    let flagged = handle.check_text(&text)?;
    for word in &flagged {
        writeln!(out, "{}", format_report(word)).map_err(CliError::Output)?;
    }
    debug!(path = %path.display(), flagged = flagged.len(), "checked file");
    Ok(flagged.len())
}

/// Check every path in `args`. Returns the total number of flagged words.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<usize, CliError> {
    let handle = load_handle(args)?;
    let mut total = 0;
    for root in &args.paths {
        for file in collect_file_paths(root, args.include_hidden)? {
            total += check_file(&handle, &file, out)?;
        }
    }
    if let Some((hits, misses)) = handle.cache_stats() {
        debug!(hits, misses, "oracle cache");
    }
    Ok(total)
}
