//! `decomment`: strip block comments from stdin to stdout.
//!
//! Exits 0 on success and 1 if the input ends inside a comment (or on an
//! I/O failure). Diagnostics go to stderr; the filter is set with
//! `DECOMMENT_LOG` (default `decomment=warn`).

use std::io::{self, BufReader, BufWriter};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "DECOMMENT_LOG";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "decomment=warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = BufReader::new(stdin.lock());
    let writer = BufWriter::new(stdout.lock());

    match decomment::run(reader, writer) {
        Ok(summary) => {
            tracing::debug!(
                state = summary.final_state.name(),
                comments = summary.stats.comments,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "decomment failed");
            ExitCode::FAILURE
        }
    }
}
