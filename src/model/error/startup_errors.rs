use std::fmt;

/// anything that stops the server from coming up. All of these are fatal
#[derive(PartialEq, Debug)]
pub enum StartupError {
    /// the config file exists but couldn't be parsed
    Config(String),
    /// couldn't create the pictures directory
    PicturesDirectory(String),
    /// no non-loopback ipv4 address to announce
    NoLanAddress(String),
    /// the ngrok session or endpoint couldn't be opened
    Tunnel(String),
    /// `--ngrok` was passed to a binary built without the `tunnel` feature
    TunnelUnavailable,
    /// rocket failed to ignite or bind
    Launch(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "Failed to parse config file: {e}"),
            StartupError::PicturesDirectory(e) => {
                write!(f, "Failed to create the pictures directory: {e}")
            }
            StartupError::NoLanAddress(e) => {
                write!(f, "Could not find a local network address: {e}")
            }
            StartupError::Tunnel(e) => write!(f, "Failed to start ngrok: {e}"),
            StartupError::TunnelUnavailable => write!(
                f,
                "This binary was built without tunnel support. Rebuild with `--features tunnel`"
            ),
            StartupError::Launch(e) => write!(f, "Failed to launch the server: {e}"),
        }
    }
}
