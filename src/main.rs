//! Lists every VideoToolbox video encoder with its supported properties.
//!
//! The report goes to stdout; diagnostics go to stderr. Exits non-zero only
//! when the initial encoder enumeration fails (or stdout breaks) — a single
//! encoder with a failing property query is logged and skipped.

use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run()
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn run() -> ExitCode {
    use vt_encoder_info::report::write_report;
    use vt_encoder_info::vt::VideoToolboxCatalog;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match write_report(&VideoToolboxCatalog, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "encoder report failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(any(target_os = "macos", target_os = "ios")))]
fn run() -> ExitCode {
    eprintln!("VideoToolbox is only available on macOS and iOS.");
    ExitCode::FAILURE
}
