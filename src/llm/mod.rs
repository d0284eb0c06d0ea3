pub mod client;

pub use client::{Complete, DEFAULT_MODEL, LlmClient};
