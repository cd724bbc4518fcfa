//! DELTASAVER - back up and restore DELTARUNE save slots.
//!
//! Exit code 0 on success, 1 on any error, including usage errors.

use std::process;

use deltasaver::cli::{self, Args, OutputManager};

#[tokio::main]
async fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => process::exit(report_usage(e)),
    };

    // Initialize logging; RUST_LOG wins over the flag-derived default
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output = OutputManager::new(args.verbose, args.quiet);

    // Run CLI and get exit code
    let exit_code = match cli::execute(args).await {
        Ok(code) => code,
        Err(e) => {
            if output.error(&e.to_string(), e.recovery_suggestion()).is_err() {
                eprintln!("Error: {}", e);
            }
            1
        }
    };

    process::exit(exit_code);
}

/// Prints a clap parse result that ended the run and returns the exit code.
///
/// `--help` and `--version` go to stdout and succeed; usage errors are
/// printed like every other error.
fn report_usage(e: clap::Error) -> i32 {
    if !e.use_stderr() {
        if e.print().is_err() {
            return 1;
        }
        return 0;
    }

    let rendered = e.to_string();
    let message = rendered.trim_start_matches("error: ").trim_end();
    if OutputManager::new(false, false).error(message, None).is_err() {
        eprintln!("Error: {message}");
    }
    1
}
