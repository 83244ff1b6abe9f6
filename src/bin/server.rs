use anyhow::{Context, Result};
use clap::Parser;
use tinykv::{config::ServerConfig, server};

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = ServerConfig::parse();

    let (listener, _) = server::bind(&config)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;

    server::run_until_ctrl_c(listener, &config).await;

    Ok(())
}
