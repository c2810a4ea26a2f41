//! OnlineSchool lesson runner CLI.

use school::{init_tracing, run_lessons, CliError, Lesson, RunConfig, LOG_ENV_VAR};
use school_core::{silent_handler, stdout_handler};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("run", String::as_str);

    let result = match command {
        "run" => run(args.get(2..).unwrap_or_default()),
        "list" => {
            print!("{}", lesson_list());
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print!("{}", usage());
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("school {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        // `school classes` is shorthand for `school run classes`
        _ if Lesson::parse(command).is_ok() => run(&args[1..]),
        _ => Err(CliError::UnknownCommand(command.to_string())),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if err.wants_usage() {
            eprintln!();
            eprint!("{}", usage());
        }
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let config = RunConfig::from_args(args)?;
    let out = if config.quiet {
        silent_handler()
    } else {
        stdout_handler()
    };
    let summary = run_lessons(&config, &out);
    tracing::info!(lessons = summary.completed.len(), "done");
    Ok(())
}

fn lesson_list() -> String {
    Lesson::ALL
        .into_iter()
        .map(|lesson| format!("  {:<10}{}\n", lesson.name(), lesson.description()))
        .collect()
}

fn usage() -> String {
    format!(
        "\
OnlineSchool: classes, structs and enums by example

Usage: school [command] [options]

Commands:
  run [lesson...]   Run lessons in order (default: all)
  <lesson>...       Shorthand for `run <lesson>...`
  list              List lessons
  help              Show this help message
  version           Show version information

Run options:
  --quiet, -q       Discard lesson output

Lessons:
{lessons}
Environment:
  {LOG_ENV_VAR}=<filter>  Enable logging to stderr (e.g. {LOG_ENV_VAR}=debug)
",
        lessons = lesson_list(),
    )
}
