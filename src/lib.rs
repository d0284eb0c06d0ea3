pub mod complexity;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod transcript;
