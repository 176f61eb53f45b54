//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

/// Path `0 - 1 - 2` plus the isolated node `3`.
pub(super) const PATH_WITH_ISOLATE: &str = r#"graph [
  node [ id 0 label "0" ]
  node [ id 1 label "1" ]
  node [ id 2 label "2" ]
  node [ id 3 label "3" ]
  edge [ source 0 target 1 ]
  edge [ source 1 target 2 ]
]
"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn random_cli(nodes: &str, coefficient: &str, seed: u64) -> Cli {
    Cli {
        random: Some(vec![nodes.to_owned(), coefficient.to_owned()]),
        seed: Some(seed),
        ..Cli::default()
    }
}

pub(super) fn roots(values: &[&str]) -> Vec<String> {
    values.iter().map(|&value| value.to_owned()).collect()
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
