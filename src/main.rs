mod app;
mod color;
mod config;
mod data;
mod error;
mod pipeline;
mod state;
mod ui;
mod web;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use config::{Cli, DashboardConfig, Frontend};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::from(Cli::parse());

    // Loaded once before any UI starts; a failure here aborts start-up.
    let dataset = data::loader::load(&config.source)
        .with_context(|| format!("loading penguin data from {}", config.source))
        .inspect_err(|e| log::error!("{e:#}"))?;
    let dataset = Arc::new(dataset);

    match config.frontend {
        Frontend::Http(addr) => {
            let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
            runtime.block_on(web::serve(dataset, addr))
        }
        Frontend::Desktop => {
            app::run(dataset).map_err(|e| anyhow::anyhow!("desktop window failed: {e}"))
        }
    }
}
