use anyhow::Result;
use clap::Parser;

use socratic::llm::{DEFAULT_MODEL, LlmClient};
use socratic::session;

#[derive(Parser, Debug)]
#[command(
    name = "socratic",
    version,
    about = "Socratic-method tutoring for the terminal.",
    long_about = None
)]
struct Cli {
    /// Chat model served by the local Ollama instance.
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run_cli().await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let client = LlmClient::new(cli.model);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    session::run(&client, &mut input, &mut output).await?;

    Ok(())
}
