//! # Bypass DNS
//!
//! DNS middleware that answers queries for ban-listed names through a
//! designated outside resolver and defers everything else to the normal
//! upstream path.

mod bootstrap;
mod di;
mod server;

use bypass_dns_application::ports::BanListStore as _;
use bypass_dns_domain::CliOverrides;
use bypass_dns_jobs::BanListReloadJob;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "bypass-dns")]
#[command(version)]
#[command(about = "DNS middleware that rescues ban-listed names via a designated resolver")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// DNS server port (overrides the config file)
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address (overrides the config file)
    #[arg(short = 'b', long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            dns_port: cli.dns_port,
            bind_address: cli.bind.clone(),
        },
    )?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        ban_list = %config.ban_list.path,
        resolve_from = %config.dns.resolve_from,
        "Configuration loaded"
    );

    let services = di::DnsServices::build(&config)?;

    // Unconditional startup load. A missing or unreadable list file is not
    // fatal: the server starts with an empty snapshot and the reload job
    // keeps trying.
    if let Err(e) = services.ban_list.reload().await {
        warn!(
            path = %config.ban_list.path,
            error = %e,
            "Initial ban list load failed, starting with an empty list"
        );
    }

    let shutdown = CancellationToken::new();
    Arc::new(
        BanListReloadJob::new(Arc::clone(&services.ban_list))
            .with_interval(config.ban_list.reload_seconds)
            .with_cancellation(shutdown.clone()),
    )
    .start()
    .await;

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.dns_port).parse()?;

    tokio::select! {
        result = server::start_dns_server(bind_addr, services.handler) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
    }

    shutdown.cancel();
    Ok(())
}
