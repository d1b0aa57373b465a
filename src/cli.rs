use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;

/// Serves a photo upload page on the local network and saves whatever gets sent to it
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// expose the server publicly through an ngrok tunnel
    #[arg(long, conflicts_with = "lan")]
    pub ngrok: bool,

    /// announce the first non-loopback ipv4 address instead of localhost
    #[arg(long)]
    pub lan: bool,

    /// companion page that redirects to the announced address
    #[arg(long, value_name = "URL", requires = "lan")]
    pub redirect_page: Option<String>,

    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
