mod answers;
mod batch;
mod catalog;
mod cli;
mod config;
mod error;
mod prompt;
mod report;
mod scoring;
mod session;
mod telemetry;
mod types;

use crate::error::QuizError;
use crate::report::OutputFormat;
use crate::types::report::QuizReport;
use clap::Parser;
use std::io::Write;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, QuizError> {
    let cli = cli::Cli::parse();
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        &loaded.logging.level,
    ))?;
    let options = loaded.scoring_options();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let answers = answers::load_answers(&cmd.answers)?;
            let issues = answers::validate_answers(&answers);
            for issue in &issues {
                tracing::warn!(%issue, "answer issue");
            }
            if loaded.scoring.strict && !issues.is_empty() {
                for issue in &issues {
                    eprintln!("- {issue}");
                }
                return Err(QuizError::StrictValidation(issues.len()));
            }

            let result = scoring::evaluate(&answers, &options)?;
            let has_warnings = !issues.is_empty();
            let quiz_report = QuizReport::new(result, &answers, issues);
            let output_format = cmd
                .format
                .map(OutputFormat::from)
                .unwrap_or(loaded.report.format);
            println!("{}", report::render(&quiz_report, output_format)?);

            if has_warnings {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let answers = answers::load_answers(&cmd.answers)?;
            if answers.is_empty() {
                tracing::warn!(path = %cmd.answers.display(), "answers file is empty");
            }
            let issues = answers::validate_answers(&answers);
            let computable = scoring::DimensionScores::compute(&answers).resolve();

            if issues.is_empty() && computable.is_ok() {
                println!("validate: {} answers, no issues", answers.len());
                return Ok(exit_code::SUCCESS);
            }

            for issue in &issues {
                println!("[WARN] {issue}");
            }
            match computable {
                Ok(_) => Ok(exit_code::WARNINGS),
                Err(e) => {
                    println!("[BLOCKING] {e}");
                    Ok(exit_code::BLOCKING)
                }
            }
        }
        cli::Commands::Take(cmd) => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut input = stdin.lock();
            let mut output = stdout.lock();

            let (result, answers) = prompt::run(&mut input, &mut output, &options)?;
            let quiz_report = QuizReport::new(result, &answers, answers::validate_answers(&answers));
            let output_format = cmd
                .format
                .map(OutputFormat::from)
                .unwrap_or(loaded.report.format);
            writeln!(output, "\n{}", report::render(&quiz_report, output_format)?)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            println!("{}", report::render_catalog(cmd.format.into())?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.is_dir() {
                return Err(QuizError::PathNotFound(cmd.dir.display().to_string()));
            }

            let entries = batch::score_dir(&cmd.dir, &options);
            if entries.is_empty() {
                println!("batch: no answer files found");
                return Ok(exit_code::WARNINGS);
            }

            for entry in &entries {
                println!("{}", entry.summary_line(&cmd.dir));
            }

            if entries.iter().any(|entry| entry.outcome.is_err()) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn exit_code_for(error: &QuizError) -> i32 {
    match error {
        QuizError::Scoring(_) | QuizError::StrictValidation(_) => exit_code::BLOCKING,
        _ => exit_code::RUNTIME_FAILURE,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
