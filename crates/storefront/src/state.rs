use crate::{
    console::{AdminConsole, Gate, ShopConsole, VendorConsole},
    di::DependenciesInject,
    seed::{SeedSummary, seed_demo_data},
};
use anyhow::{Context, Result};
use prometheus_client::{encoding::text::encode, registry::Registry};
use shared::config::Config;
use std::{fmt, sync::Arc};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self> {
        let mut registry = Registry::default();
        let seed_demo = config.seed_demo_data;

        let di_container = DependenciesInject::new(config, &mut registry);

        if seed_demo {
            let SeedSummary {
                users,
                vendors,
                products,
                orders,
            } = seed_demo_data(&di_container)
                .await
                .context("Failed to seed demo data")?;
            info!(
                "🌱 Demo data loaded: {users} users, {vendors} vendors, {products} products, {orders} orders"
            );
        }

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
        })
    }

    pub fn gate(&self) -> Gate {
        Gate::new(
            self.di_container.identity.clone(),
            self.di_container.policy,
        )
    }

    pub fn shop(&self) -> ShopConsole {
        ShopConsole::new(self.gate(), &self.di_container)
    }

    pub fn vendor(&self) -> VendorConsole {
        VendorConsole::new(self.gate(), &self.di_container)
    }

    pub fn admin(&self) -> AdminConsole {
        AdminConsole::new(self.gate(), &self.di_container)
    }

    /// Prometheus text exposition of every service metric.
    pub fn render_metrics(&self) -> Result<String> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry).context("Failed to encode metrics")?;
        Ok(buffer)
    }
}
