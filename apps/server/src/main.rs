use anyhow::Context;
use mlife::domain::config::ApiConfig;
use mlife::kernel::config::load_config;
use mlife_server::{Server, init_logging};
use std::path::PathBuf;

#[mlife_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg: ApiConfig = load_config(path).context("Critical: Configuration is malformed")?;

    let _log = init_logging(&cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
