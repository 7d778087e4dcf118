use anyhow::Context;
use bypass_dns_application::ports::{BanListStore, UpstreamExchange};
use bypass_dns_application::use_cases::HandleQueryUseCase;
use bypass_dns_domain::Config;
use bypass_dns_infrastructure::dns::{BypassHandler, FileBanList, ForwardHandler, UdpExchanger};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Fully wired DNS services.
///
/// The ban list store is shared between the request handler (reader) and
/// the reload job (writer); everything else is owned by the handler chain.
pub struct DnsServices {
    pub ban_list: Arc<dyn BanListStore>,
    pub handler: BypassHandler<ForwardHandler>,
}

impl DnsServices {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_millis(config.dns.query_timeout);

        let ban_list: Arc<dyn BanListStore> = Arc::new(FileBanList::new(&config.ban_list.path));

        let resolve_from: SocketAddr = config
            .dns
            .resolve_from
            .parse()
            .with_context(|| format!("invalid resolver address '{}'", config.dns.resolve_from))?;
        let designated = Arc::new(UdpExchanger::new(resolve_from, timeout));

        let mut upstreams: Vec<Arc<dyn UpstreamExchange>> =
            Vec::with_capacity(config.dns.upstream_servers.len());
        for server in &config.dns.upstream_servers {
            let addr: SocketAddr = server
                .parse()
                .with_context(|| format!("invalid upstream address '{}'", server))?;
            upstreams.push(Arc::new(UdpExchanger::new(addr, timeout)));
        }

        let use_case = Arc::new(HandleQueryUseCase::new(Arc::clone(&ban_list), designated));
        let handler = BypassHandler::new(use_case, ForwardHandler::new(upstreams));

        Ok(Self { ban_list, handler })
    }
}
