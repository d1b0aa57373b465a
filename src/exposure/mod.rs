use crate::cli::Args;
use crate::config::PhotoDropConfig;
use crate::model::error::startup_errors::StartupError;

pub mod lan;
pub mod qr;
pub mod tunnel;

use tunnel::Tunnel;

/// how the server is reached, and so which url gets announced
#[derive(Debug, PartialEq, Clone)]
pub enum Exposure {
    /// `http://localhost:<port>`
    LocalPort,
    /// `http://<lan ip>:<port>`, optionally wrapped in a companion redirect page
    LanAddress { redirect_page: Option<String> },
    /// public url of an ngrok tunnel
    Tunnel,
}

/// the url announced at startup. Holds the tunnel open, if there is one
pub struct Announcement {
    pub url: String,
    _tunnel: Option<Tunnel>,
}

impl Exposure {
    /// picks the strategy from the command line. `--redirect-page` wins over the config file
    pub fn select(args: &Args, config: &PhotoDropConfig) -> Exposure {
        if args.ngrok {
            Exposure::Tunnel
        } else if args.lan {
            Exposure::LanAddress {
                redirect_page: args
                    .redirect_page
                    .clone()
                    .or_else(|| config.lan.redirect_page.clone()),
            }
        } else {
            Exposure::LocalPort
        }
    }

    pub async fn announce(&self, config: &PhotoDropConfig) -> Result<Announcement, StartupError> {
        let port = config.server.port;
        match self {
            Exposure::LocalPort => Ok(Announcement {
                url: format!("http://localhost:{port}"),
                _tunnel: None,
            }),
            Exposure::LanAddress { redirect_page } => {
                let ip = lan::discover_lan_address()?;
                let local_url = format!("http://{ip}:{port}");
                let url = match redirect_page {
                    Some(page) => lan::redirect_page_url(page, &local_url),
                    None => local_url,
                };
                Ok(Announcement { url, _tunnel: None })
            }
            Exposure::Tunnel => {
                let tunnel =
                    tunnel::open_tunnel(port, config.tunnel.auth_token.as_deref()).await?;
                Ok(Announcement {
                    url: tunnel.url.clone(),
                    _tunnel: Some(tunnel),
                })
            }
        }
    }
}

impl Announcement {
    /// prints the url, and its QR code when one can be made, to stderr
    pub fn print(&self) {
        match qr::render_qr(&self.url) {
            Ok(code) => eprintln!("Scan this QR code to open the upload page:\n{code}"),
            Err(e) => log::warn!("Could not generate the QR code: {e}"),
        }
        log::info!("Server listening at {}", self.url);
    }
}
