use std::fmt;

/// One question/answer exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Append-only record of every exchange in a session.
///
/// Entries are never edited, reordered, or dropped. The rendered `Q:`/`A:`
/// form is what follow-up prompts and the final summary see.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Exchange>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question: &str, answer: &str) {
        self.entries.push(Exchange {
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Exchange] {
        &self.entries
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Q: {}", entry.question)?;
            writeln!(f, "A: {}", entry.answer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.record("what?", "this");
        transcript.record("why?", "because");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].question, "what?");
        assert_eq!(transcript.entries()[1].answer, "because");
    }

    #[test]
    fn renders_accumulated_qa_text() {
        let mut transcript = Transcript::new();
        transcript.record("what?", "this");
        transcript.record("why?", "because");

        assert_eq!(
            transcript.to_string(),
            "Q: what?\nA: this\nQ: why?\nA: because\n"
        );
    }

    #[test]
    fn empty_transcript_renders_nothing() {
        assert_eq!(Transcript::new().to_string(), "");
    }
}
