//! Prompt construction for each request the tutor makes.
//!
//! All builders are pure string formatting; the session loop decides which
//! results go to the backend. The initial question is shown verbatim and
//! never sent anywhere.

/// Opening question for the very first iteration.
pub fn initial_question(topic: &str) -> String {
    format!(
        "Let's begin with an intuition about {topic}. What do you already know about this topic?"
    )
}

/// Asks the model to restate the topic so the user can confirm it before
/// the session starts.
pub fn rich_topic_prompt(topic: &str) -> String {
    format!("Rephrase the following topic in a richer and more detailed way: {topic}")
}

/// Asks the model for the next guiding question, conditioned on the full
/// transcript and the target complexity level.
pub fn next_question_prompt(topic: &str, transcript: &str, level: &str) -> String {
    format!(
        "The topic is {topic}. Based on the previous answers and at a {level} level, generate the next question to guide the user to learn more about the topic:\n{transcript}"
    )
}

/// Asks the model for a reinforcement quiz question over the same inputs.
pub fn quiz_prompt(topic: &str, transcript: &str, level: &str) -> String {
    format!(
        "The topic is {topic}. Based on the previous answers and at a {level} level, generate a quiz question to reinforce learning:\n{transcript}"
    )
}
