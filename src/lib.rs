//! SHELF application library
//!
//! Wires the books module into the module registry and runs the HTTP server.

pub mod modules;

use anyhow::Context;
use shelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Build a registry holding every project module
pub fn registry(settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, settings);
    registry
}

/// Run the module lifecycle around the HTTP server until Ctrl-C
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = registry(&settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    let served = shelf_http::start_server(&registry, &settings, shutdown_signal()).await;

    registry
        .stop_modules()
        .await
        .context("failed to stop modules")?;
    served
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
