use anyhow::Result;
use logoscrape::FetchConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    logoscrape::run(FetchConfig::default()).await?;

    Ok(())
}
