//! Pair Reserve Tracker - Main Entry Point

use anyhow::Result;
use pair_reserve_tracker::{
    Config,
    monitor::{self, PollLoop, TracingReporter, shutdown_channel},
    network::AlloyChainClient,
    pools, utils,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let _logging_guard = utils::setup_logging(&config.log_dir)?;

    info!("📈 Pair Reserve Tracker v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   RPC: {}", config.rpc_url);
    info!("   Pair: {}", config.pair_address);
    info!("   Poll Interval: {:?}", config.poll_interval);
    info!("   RPC Timeout: {:?}", config.rpc_timeout);
    if config.max_consecutive_failures > 0 {
        info!("   Escalate After: {} consecutive failures", config.max_consecutive_failures);
    }

    let client = AlloyChainClient::new(&config.rpc_url, config.rpc_timeout)
        .inspect_err(|e| error!("❌ {}", e.describe()))?;
    monitor::check_connection(&client)
        .await
        .inspect_err(|e| error!("❌ {}", e.describe()))?;

    let pair = pools::resolve_pair(&client, config.pair_address)
        .await
        .inspect_err(|e| error!("❌ {}", e.describe()))?;
    utils::print_pair_context(&pair);

    // Setup shutdown handler
    let (shutdown_handle, mut shutdown_signal) = shutdown_channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("\n📛 Received shutdown signal (Ctrl+C)...");
                shutdown_handle.trigger();
            }
            Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
        }
    });

    let reporter = TracingReporter::new(config.output_format);
    let mut poll_loop = PollLoop::new(
        &client,
        &pair,
        config.poll_interval,
        config.max_consecutive_failures,
        reporter,
    );
    let stats = poll_loop.run(&mut shutdown_signal).await;

    utils::print_final_statistics(&stats);

    Ok(())
}
