mod config;
mod error;

use alg_compute::{factor::factor_with, is_valid_input, simplify_with, Step};
use clap::Parser;
use config::Config;
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode};
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};

/// Simplifies the given expression, and factors it unless configured otherwise. Returns the
/// text to print along with the steps taken.
fn evaluate(input: &str, config: &Config) -> Result<(String, Vec<Step>), Error> {
    if !is_valid_input(input) {
        return Err(Error::InvalidInput);
    }

    let mut steps = Vec::new();
    let simplified = simplify_with(input, &mut steps)?;
    let output = if config.simplify_only {
        simplified.to_string()
    } else {
        factor_with(&simplified, &mut steps).to_string()
    };

    Ok((output, steps))
}

/// Evaluates one line of input, printing the result or the error.
fn read_eval(input: &str, config: &Config) {
    match evaluate(input, config) {
        Ok((output, steps)) => {
            if config.steps {
                for step in &steps {
                    println!("  {}", step);
                }
            }
            println!("{}", output);
        },
        Err(err) => err.report_to_stderr(input),
    }
}

/// Evaluates every non-empty line of the given source.
fn execute(source: &str, config: &Config) {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .for_each(|line| read_eval(line, config));
}

fn init_logger(config: &Config) {
    let logger = CombinedLogger::init(vec![TermLogger::new(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    if let Err(err) = logger {
        eprintln!("could not initialize logger: {}", err);
    }
}

fn main() -> ExitCode {
    let config = Config::parse();
    init_logger(&config);

    if let Some(path) = &config.file {
        // run source file
        match fs::read_to_string(path) {
            Ok(source) => execute(&source, &config),
            Err(err) => {
                eprintln!("could not read `{}`: {}", path.display(), err);
                return ExitCode::FAILURE;
            },
        }
    } else if !io::stdin().is_terminal() {
        // read expressions from stdin
        let mut source = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut source) {
            eprintln!("could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }

        execute(&source, &config);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("could not start the line editor: {}", err);
                return ExitCode::FAILURE;
            },
        };

        fn process_line(rl: &mut DefaultEditor, config: &Config) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            read_eval(&input, config);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &config) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    ExitCode::SUCCESS
}
