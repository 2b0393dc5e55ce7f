//! Line-oriented front end for [`QuizSession`].

use crate::answers::Answers;
use crate::catalog::{self, Question, QuestionKind, SCALE_LABELS};
use crate::error::{QuizError, Result};
use crate::scoring::ScoringOptions;
use crate::session::{parse_input, QuizSession, Step};
use crate::types::scoring::QuizResult;
use std::io::{BufRead, Write};

pub const BACK_COMMAND: &str = ":back";
pub const RESTART_COMMAND: &str = ":restart";

fn write_question<W: Write>(output: &mut W, question: &Question) -> Result<()> {
    writeln!(output, "\n{}", question.prompt)?;
    match question.kind {
        QuestionKind::Text { placeholder } => writeln!(output, "  ({placeholder})")?,
        QuestionKind::Scale { .. } => {
            for (index, label) in SCALE_LABELS.iter().enumerate() {
                writeln!(output, "  {}) {}", index + 1, label)?;
            }
        }
        QuestionKind::Single { options } | QuestionKind::Categorical { options } => {
            for (index, option) in options.iter().enumerate() {
                writeln!(output, "  {}) {}", index + 1, option.label)?;
            }
        }
    }
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(QuizError::InputClosed);
    }
    Ok(line)
}

/// Asks every question section by section until the session completes.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &ScoringOptions,
) -> Result<(QuizResult, Answers)> {
    let mut session = QuizSession::new();
    writeln!(
        output,
        "Energy Alignment Quiz: {} questions. Type {BACK_COMMAND} to revisit the previous section or {RESTART_COMMAND} to start over.",
        catalog::questions().count()
    )?;

    'section: loop {
        let section = session.current_section();
        writeln!(
            output,
            "\n{} ({:.0}%) | {} {}\n{}",
            session.progress(),
            session.progress().percent(),
            section.icon,
            section.title,
            section.subtitle
        )?;

        for question in section.questions {
            loop {
                write_question(output, question)?;
                let line = read_line(input)?;
                match line.trim() {
                    BACK_COMMAND => {
                        if session.back() {
                            continue 'section;
                        }
                        writeln!(output, "  already at the first section")?;
                        continue;
                    }
                    RESTART_COMMAND => {
                        session.restart();
                        writeln!(output, "  answers cleared")?;
                        continue 'section;
                    }
                    _ => {}
                }
                match parse_input(question, &line) {
                    Ok(raw) => {
                        session.record(question.id, &raw)?;
                        break;
                    }
                    Err(e) => writeln!(output, "  {e}")?,
                }
            }
        }

        match session.advance()? {
            Step::Section(_) => {
                tracing::info!(section = session.position(), "section complete");
            }
            Step::Complete => break,
        }
    }

    let result = session.finish(options)?;
    Ok((result, session.answers().clone()))
}
