use clap::Parser;
use palisade_dns::bootstrap::{init_logging, load_config};
use palisade_dns::server;
use palisade_dns_api::{create_api_routes, AppState};
use palisade_dns_application::{GetLogsUseCase, GetStatsUseCase, UpdateListUseCase};
use palisade_dns_domain::CliOverrides;
use palisade_dns_infrastructure::{ArcSwapListStore, DnsEngine, HttpBlocklistFetcher, MutexStatsLog, UdpForwarder};
use palisade_dns_jobs::BlocklistRefreshJob;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "palisade-dns")]
#[command(version)]
#[command(about = "Recursive-forwarding DNS resolver with selective blocklist sinkholing")]
struct Cli {
    /// Path to the YAML config file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web dashboard port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address for both listeners
    #[arg(short = 'b', long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
    };

    let config = match load_config(cli.config.as_deref(), overrides) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fatal: invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    info!("Palisade DNS starting");

    let list_store = Arc::new(ArcSwapListStore::new());
    let stats_log = Arc::new(MutexStatsLog::new());
    let forwarder = Arc::new(UdpForwarder::new());
    let blocklist_fetcher = Arc::new(HttpBlocklistFetcher::new());

    let sinkhole_ip: std::net::Ipv4Addr = config
        .blocking
        .sinkhole_ip
        .parse()
        .expect("validated by load_config");

    let engine = Arc::new(DnsEngine::new(
        list_store.clone(),
        stats_log.clone(),
        forwarder,
        format!("{}:53", config.upstream.upstream_dns),
        sinkhole_ip,
    ));

    let refresh_job = Arc::new(BlocklistRefreshJob::new(
        blocklist_fetcher,
        list_store.clone(),
        config.blocking.blocklist_url.clone(),
        config.blocking.blocklist_refresh_interval,
    ));
    refresh_job.start().await;

    let api_state = AppState {
        get_stats: Arc::new(GetStatsUseCase::new(list_store.clone(), stats_log.clone())),
        get_logs: Arc::new(GetLogsUseCase::new(stats_log.clone())),
        update_list: Arc::new(UpdateListUseCase::new(list_store.clone())),
    };
    let api_router = create_api_routes(api_state);

    let dns_addr: SocketAddr = format!("{}:{}", config.server.dns_host, config.server.dns_port).parse()?;
    let web_addr: SocketAddr = format!("{}:{}", config.server.dns_host, config.server.web_dashboard_port).parse()?;

    let dns_handle = tokio::spawn(server::start_dns_server(dns_addr, engine));
    let web_handle = tokio::spawn(server::start_web_server(web_addr, api_router));

    tokio::select! {
        result = dns_handle => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    error!(error = %err, "DNS server exited");
                    std::process::exit(1);
                }
                Err(err) => {
                    error!(error = %err, "DNS server task panicked");
                    std::process::exit(1);
                }
            }
        }
        result = web_handle => {
            if let Ok(Err(err)) = result {
                error!(error = %err, "Dashboard API exited");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    Ok(())
}
