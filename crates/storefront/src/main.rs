use anyhow::{Context, Result};
use shared::{
    config::Config,
    domain::requests::SignInRequest,
    utils::init_logger,
};
use std::sync::Arc;
use storefront::{seed::DEMO_PASSWORD, state::AppState};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let (config, state, _log_guard) = setup().await.context("Failed to setup application")?;

    if config.seed_demo_data {
        report_platform(&state).await;
    }

    info!("🟢 {} ready, press Ctrl+C to stop", config.service_name);
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    info!("🛑 Shutdown signal received (Ctrl+C).");

    match state.render_metrics() {
        Ok(metrics) => info!("📈 Final metrics:\n{metrics}"),
        Err(e) => warn!("Could not render metrics: {e:#}"),
    }

    Ok(())
}

async fn setup() -> Result<(Config, Arc<AppState>, Option<WorkerGuard>)> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let log_guard = init_logger(&config.service_name, config.dev_mode, config.enable_file_log)
        .context("Failed to initialize logger")?;

    info!("🚀 Starting {} initialization...", config.service_name);
    info!(
        "⚙️ Order transitions: {}, stock reservation: {}",
        config.transition_policy, config.reserve_stock_on_checkout
    );

    let state = Arc::new(
        AppState::new(config.clone())
            .await
            .context("Failed to create AppState")?,
    );

    info!("✅ Application setup completed successfully.");
    Ok((config, state, log_guard))
}

/// Signs in as the demo admin and logs the platform dashboard.
async fn report_platform(state: &AppState) {
    let di = &state.di_container;
    let request = SignInRequest {
        email: "admin@ecommerce.com".into(),
        password: DEMO_PASSWORD.into(),
    };

    let session = match di.login.sign_in(&request).await {
        Ok(response) => response.data.session,
        Err(e) => {
            warn!("Demo admin sign in failed: {e}");
            return;
        }
    };

    match state.admin().dashboard(&session).await {
        Ok(stats) => info!(
            "📊 Platform: {} shoppers, {} vendors, {} products, {} orders, revenue {}",
            stats.total_users,
            stats.total_vendors,
            stats.total_products,
            stats.total_orders,
            stats.total_revenue
        ),
        Err(e) => warn!("Dashboard unavailable: {e}"),
    }

    di.identity.sign_out(&session).await;
}
