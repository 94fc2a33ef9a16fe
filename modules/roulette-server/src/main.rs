use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roulette_core::{BusinessSearcher, Config, RandomSampler, YelpClient};
use roulette_server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("roulette=info".parse()?)
                .add_directive("yelp_client=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    config.log_redacted();

    let searcher: Arc<dyn BusinessSearcher> =
        Arc::new(YelpClient::new(config.access_token.clone()));

    let state = Arc::new(AppState {
        sampler: RandomSampler::from_os_rng(searcher),
        max_sample_size: config.max_sample_size,
    });

    let app = build_router(state);

    let addr = config.addr();
    info!("Yelp Roulette server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
