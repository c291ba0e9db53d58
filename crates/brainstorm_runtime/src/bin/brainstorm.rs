//! Brainstorm CLI entry point.

use brainstorm_foundation::{ErrorKind, Result};
use brainstorm_runtime::{Repl, RuntimeConfig, Session, logging};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run(env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {}\x1b[0m", e.describe());
            if matches!(e.kind, ErrorKind::Usage(_)) {
                eprintln!("Run `brainstorm --help` for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl IntoIterator<Item = String>) -> Result<()> {
    let config = RuntimeConfig::from_env_and_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("brainstorm {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.log_level)?;

    let mut session = Session::load(&config)?;

    if config.self_check {
        let report = session.self_check()?;
        tracing::info!(templates = report.total(), "self-check passed");
    }

    // Subjects on the command line: print titles and exit
    if let Some(subjects) = &config.subjects {
        if config.explain {
            for line in session.explain(subjects) {
                eprintln!("\x1b[2m{line}\x1b[0m");
            }
        }
        let set = session.resolve_subjects(subjects);
        for title in session.generate(&set, config.batch_count())? {
            println!("{title}");
        }
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mBrainstorm\x1b[0m - Project title generator

\x1b[1mUSAGE:\x1b[0m
    brainstorm [OPTIONS] [SUBJECTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SUBJECTS...]    Comma-separated nouns; print titles and exit

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -d, --data-dir DIR   Title and word lists (default: resources)
    -n, --count N        Titles to print for SUBJECTS (default: 10)
    -s, --seed N         Seed the generator for repeatable output
        --explain        Show how each subject resolved
        --no-check       Skip the start-up template check
    -v, --verbose        More log output (repeat for more)

\x1b[1mENVIRONMENT:\x1b[0m
    BRAINSTORM_DATA_DIR  Same as --data-dir
    BRAINSTORM_SEED      Same as --seed
    BRAINSTORM_LOG       Log level (error, warn, info, debug, trace)

\x1b[1mEXAMPLES:\x1b[0m
    brainstorm                          Start the interactive prompt
    brainstorm octopus, deer            Print ten titles and exit
    brainstorm -n 3 -s 42 scissors      Three repeatable titles
    brainstorm --explain octopi, rice   Show table lookups too

\x1b[1mINTERACTIVE:\x1b[0m
    Tab                  Complete a known noun
    Ctrl+C               Cancel the current request
    Ctrl+D               Exit"
    );
}
