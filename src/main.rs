use std::{fs, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use pascalina::{evaluate_expression, run_program};

/// pascalina runs programs written in a small Pascal-like language and
/// prints the variables they leave behind.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a source file instead of source text.
    #[arg(short, long)]
    file: bool,

    /// Treat the input as a bare arithmetic expression instead of a program.
    #[arg(short, long)]
    expr: bool,

    /// Log level for scope and evaluation tracing.
    #[arg(long, env = "PASCALINA_LOG")]
    log_level: Option<LevelFilter>,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::builder().filter_level(args.log_level.unwrap_or(LevelFilter::Warn))
                         .init();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.expr {
        return match evaluate_expression(&source) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    match run_program(&source) {
        Ok(outcome) => {
            for (name, value) in &outcome.variables {
                println!("{name} = {value}");
            }
            if let Some(result) = outcome.result {
                println!("result: {result}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn expression_may_come_from_a_file() {
        let args = Args::try_parse_from(["pascalina", "--file", "--expr", "sum.txt"]).unwrap();
        assert!(args.file && args.expr);
        assert_eq!(args.contents, "sum.txt");
    }
}
