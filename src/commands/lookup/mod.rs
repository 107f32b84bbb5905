//! GitHub user lookup: profile plus a filterable repository list.

mod dispatch;
mod filter;
mod runner;
mod show;
mod state;
mod tui;

use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use crate::infra::github::{ReqwestClient, UserClient};
use crate::shared::config::Config;

pub use show::ShowArgs;

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct ViewArgs {
    /// Username to look up immediately on start
    pub username: Option<String>,
}

impl ViewArgs {
    pub fn run(&self, config: &Config) -> anyhow::Result<()> {
        let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
        let client: Arc<dyn UserClient> = Arc::new(
            ReqwestClient::new(&config.api.base_url, config.api.timeout())
                .context("failed to set up GitHub client")?,
        );

        tracing::info!(base_url = %config.api.base_url, "starting lookup view");
        tui::run(self.username.clone(), client, runtime.handle().clone())
    }
}

impl ShowArgs {
    pub fn run(&self, config: &Config) -> anyhow::Result<()> {
        show::run(self, config)
    }
}
