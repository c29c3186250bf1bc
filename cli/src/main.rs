use std::io::{self, Write};

use flagscan_core::{interpret, scan, validate_definitions};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod definitions;

use definitions::default_definitions;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    init_logging();

    let tokens: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if let Err(err) = run(&tokens) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

fn run(tokens: &[String]) -> Result<(), String> {
    let definitions = default_definitions();
    for err in validate_definitions(&definitions) {
        warn!(%err, "flag table problem");
    }

    let output = scan(tokens);
    debug!(
        occurrences = output.occurrences.len(),
        diagnostics = output.diagnostics.len(),
        "scanned arguments"
    );

    let mut stderr = io::stderr().lock();
    for diagnostic in &output.diagnostics {
        closed_pipe_ok(writeln!(stderr, "{diagnostic}"))
            .map_err(|err| format!("Failed to write diagnostics: {err}"))?;
    }

    let report = interpret(&output.occurrences, &definitions);
    closed_pipe_ok(report.write_to(io::stdout().lock()))
        .map_err(|err| format!("Failed to write report: {err}"))
}

/// A reader that stops early (`flagscan ... | head -1`) ends output normally.
fn closed_pipe_ok(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_pipe_is_not_an_error() {
        let broken = Err(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(closed_pipe_ok(broken).is_ok());
    }

    #[test]
    fn test_other_write_errors_propagate() {
        let denied = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        let err = closed_pipe_ok(denied).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
