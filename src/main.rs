use region_cache::regions::HttpRegionSource;
use region_cache::{adapt_properties, logging, AppConfig, AppError, BackendProperty, RegionCache};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // 1️⃣ Configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Logging (stderr; stdout carries the output JSON)
    if let Err(e) = logging::init_logging(&config) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    // 3️⃣ Adapt the payload named on the command line, or stdin
    let input = std::env::args().nth(1);
    if let Err(e) = run(config, input).await {
        error!(error = %e, "adapting properties failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig, input: Option<String>) -> Result<(), AppError> {
    let source = HttpRegionSource::new(
        &config.api_url,
        config.api_token.clone(),
        config.http_timeout,
    )?;
    let regions = RegionCache::new(Arc::new(source), config.cache.clone());

    regions.ensure_fresh().await;
    if !regions.is_initialized() {
        warn!("region list unavailable; regions without an embedded relation will show as Other");
    }

    let payload = read_input(input.as_deref()).await?;
    let backend: Vec<BackendProperty> = serde_json::from_str(&payload)?;
    let properties = adapt_properties(&backend, &regions);

    info!(
        properties = properties.len(),
        regions = regions.len(),
        "adapted backend properties"
    );

    println!("{}", serde_json::to_string_pretty(&properties)?);
    Ok(())
}

async fn read_input(path: Option<&str>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}
