use std::net::{IpAddr, Ipv4Addr};

use local_ip_address::list_afinet_netifas;

use crate::model::error::startup_errors::StartupError;

/// the first non-loopback ipv4 address across all network interfaces
pub fn discover_lan_address() -> Result<Ipv4Addr, StartupError> {
    let interfaces =
        list_afinet_netifas().map_err(|e| StartupError::NoLanAddress(e.to_string()))?;
    first_lan_ipv4(&interfaces).ok_or_else(|| {
        StartupError::NoLanAddress("no non-loopback ipv4 interface is up".to_string())
    })
}

fn first_lan_ipv4(interfaces: &[(String, IpAddr)]) -> Option<Ipv4Addr> {
    interfaces.iter().find_map(|(name, ip)| match ip {
        IpAddr::V4(v4) if !v4.is_loopback() => {
            log::debug!("Using address {v4} of interface {name}");
            Some(*v4)
        }
        _ => None,
    })
}

/// `<page>?url=<local url>`, percent-encoded so the companion page can redirect back to us
pub fn redirect_page_url(page: &str, local_url: &str) -> String {
    let separator = if page.contains('?') { '&' } else { '?' };
    format!("{page}{separator}url={}", urlencoding::encode(local_url))
}
