use anyhow::{Context, Result};
use clap::Parser;
use tinykv::{config::ClientConfig, Client};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

const PROMPT: &str = "CMD > ";

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = ClientConfig::parse();
    let mut client = Client::connect(config.server)
        .await
        .with_context(|| format!("failed to connect to {}", config.server))?;

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = line.trim();
        if command == "exit" {
            break;
        }
        // An empty write would leave us waiting on a reply that never comes.
        if command.is_empty() {
            continue;
        }

        match client.send(command).await? {
            Some(reply) => println!("Received from server: {}", reply),
            None => {
                info!("server closed the connection");
                println!("Connection closed by server");
                break;
            }
        }
    }

    Ok(())
}
