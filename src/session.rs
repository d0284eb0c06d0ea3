use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::complexity::level_for;
use crate::llm::Complete;
use crate::prompts;
use crate::transcript::Transcript;

const DEFAULT_ITERATIONS: usize = 50;
const DEFAULT_START_LEVEL: &str = "high-school";
const DEFAULT_END_LEVEL: &str = "graduate";

/// A quiz round runs whenever the iteration index is a multiple of this,
/// which includes the very first iteration.
const QUIZ_INTERVAL: usize = 10;

/// Settings gathered once the user has confirmed the topic. Fixed for the
/// rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub iterations: usize,
    pub start_level: String,
    pub end_level: String,
}

impl SessionConfig {
    /// Builds a config from the raw answers to the three setup prompts.
    /// Blank answers take the defaults; a non-numeric iteration count is a
    /// fatal parse error rather than a silent default.
    fn from_answers(iterations: &str, start_level: &str, end_level: &str) -> Result<Self> {
        let iterations = match iterations.trim() {
            "" => DEFAULT_ITERATIONS,
            raw => raw
                .parse()
                .with_context(|| format!("invalid iteration count: {raw:?}"))?,
        };

        Ok(Self {
            iterations,
            start_level: non_blank_or(start_level, DEFAULT_START_LEVEL),
            end_level: non_blank_or(end_level, DEFAULT_END_LEVEL),
        })
    }
}

fn non_blank_or(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user rejected the rephrased topic before any teaching happened.
    /// A normal exit, not a failure.
    Aborted,
    Completed,
}

/// Drives a full tutoring session over the given input/output handles.
///
/// Every backend call blocks the dialogue until it returns; any backend or
/// parse failure propagates immediately and ends the session.
pub async fn run<C, R, W>(llm: &C, input: &mut R, output: &mut W) -> Result<SessionOutcome>
where
    C: Complete,
    R: BufRead,
    W: Write,
{
    let topic = ask(input, output, "Please enter the topic to teach: ")?;

    let rephrased = llm
        .complete(&prompts::rich_topic_prompt(&topic))
        .await
        .context("Failed to rephrase the topic")?;
    writeln!(output, "Generated Rich Prompt:\n{rephrased}\n")?;

    let confirmation = ask(input, output, "Is this what you meant? (yes/no): ")?;
    if !confirmation.eq_ignore_ascii_case("yes") {
        writeln!(
            output,
            "Please restart the program and enter a more specific topic."
        )?;
        return Ok(SessionOutcome::Aborted);
    }

    let iterations = ask(
        input,
        output,
        "How many teaching iterations would you like? (default is 50): ",
    )?;
    let start_level = ask(
        input,
        output,
        "Enter the starting complexity level (default is 'high-school'): ",
    )?;
    let end_level = ask(
        input,
        output,
        "Enter the ending complexity level (default is 'graduate'): ",
    )?;
    let config = SessionConfig::from_answers(&iterations, &start_level, &end_level)?;

    let transcript = teach(llm, input, output, &topic, &config).await?;

    writeln!(output, "\nTeaching session complete.")?;
    writeln!(output, "Summary of Q&A:")?;
    write!(output, "{transcript}")?;
    output.flush()?;

    Ok(SessionOutcome::Completed)
}

async fn teach<C, R, W>(
    llm: &C,
    input: &mut R,
    output: &mut W,
    topic: &str,
    config: &SessionConfig,
) -> Result<Transcript>
where
    C: Complete,
    R: BufRead,
    W: Write,
{
    let mut transcript = Transcript::new();
    let mut question = prompts::initial_question(topic);

    for i in 0..config.iterations {
        writeln!(output, "\nIteration {}:", i + 1)?;
        writeln!(output, "Question: {question}")?;
        let answer = ask(input, output, "Your answer: ")?;
        transcript.record(&question, &answer);

        let level = level_for(i, config.iterations, &config.start_level, &config.end_level);

        // Generated even on the last iteration, where it is never shown.
        question = llm
            .complete(&prompts::next_question_prompt(
                topic,
                &transcript.to_string(),
                level,
            ))
            .await
            .context("Failed to generate the next question")?;

        if i % QUIZ_INTERVAL == 0 {
            let quiz = llm
                .complete(&prompts::quiz_prompt(topic, &transcript.to_string(), level))
                .await
                .context("Failed to generate a quiz question")?;
            writeln!(output, "Quiz: {quiz}")?;
            let quiz_answer = ask(input, output, "Your quiz answer: ")?;
            transcript.record(&quiz, &quiz_answer);
        }
    }

    Ok(transcript)
}

/// Writes a prompt, flushes, and reads one line with the trailing newline
/// stripped. End of input reads as an empty answer.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
