use std::sync::Arc;
use std::time::Duration;

use tokio::signal;

use lexi_api::HttpDictionaryClient;
use lexi_config::Config;

pub mod controller;
pub mod events;
pub mod flows;
pub mod notify;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::new();

    let api = HttpDictionaryClient::new(
        config.network.api_base_url.clone(),
        Duration::from_millis(config.network.request_timeout_ms),
    )?;
    let store = Arc::new(Store::new(
        Arc::new(api),
        Duration::from_millis(config.ui.notification_timeout_ms),
    ));

    // Initial page load
    store.init().await;

    let controller = AppController::new(store);
    let mut tasks = controller.spawn_tasks();

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("event loop exited"),
                Some(Ok(Err(e))) => tracing::error!("event loop failed: {e}"),
                Some(Err(e)) => tracing::error!("event loop panicked: {e}"),
                None => {}
            }
        }
    }

    Ok(())
}
