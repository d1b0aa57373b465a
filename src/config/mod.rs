use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use config::{Config, File, FileFormat};
use rocket::serde::Deserialize;

use crate::model::error::startup_errors::StartupError;

pub static DEFAULT_CONFIG_PATH: &str = "./PhotoDrop.toml";

/// where the http listener binds
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct PicturesConfig {
    pub directory: String,
    /// caps both the whole multipart form and the file inside it
    #[serde(rename = "maxuploadmebibytes")]
    pub max_upload_mebibytes: u64,
}

/// config properties for `--lan`
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(crate = "rocket::serde", default)]
pub struct LanConfig {
    /// companion page that receives the local url as its `url` query parameter
    #[serde(rename = "redirectpage")]
    pub redirect_page: Option<String>,
}

/// config properties for `--ngrok`
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(crate = "rocket::serde", default)]
pub struct TunnelConfig {
    /// falls back to the `NGROK_AUTHTOKEN` environment variable when not set
    #[serde(rename = "authtoken")]
    pub auth_token: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct LogConfig {
    pub level: String,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(crate = "rocket::serde", default)]
pub struct PhotoDropConfig {
    pub server: ServerConfig,
    pub pictures: PicturesConfig,
    pub lan: LanConfig,
    pub tunnel: TunnelConfig,
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl Default for PicturesConfig {
    fn default() -> Self {
        PicturesConfig {
            directory: "pictures".to_string(),
            max_upload_mebibytes: 10,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// unknown levels fall back to info
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Parses the toml config file at `path`, if it exists.
/// A missing file means defaults, but a file that fails to parse stops startup
pub fn parse_config(path: &Path) -> Result<PhotoDropConfig, StartupError> {
    if !path.exists() {
        log::warn!(
            "No config file found at {}. Continuing startup...",
            path.display()
        );
        return Ok(PhotoDropConfig::default());
    }
    let settings = Config::builder()
        .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml))
        .build()
        .map_err(|e| StartupError::Config(e.to_string()))?;
    settings
        .try_deserialize()
        .map_err(|e| StartupError::Config(e.to_string()))
}
