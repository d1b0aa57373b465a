//! Public exposure through ngrok. Only compiled in with the `tunnel` feature

use crate::model::error::startup_errors::StartupError;

/// an open ngrok endpoint forwarding to the local server. Dropping it closes the tunnel
pub struct Tunnel {
    pub url: String,
    #[cfg(feature = "tunnel")]
    _forwarder: Box<dyn Send>,
}

/// opens an http endpoint that forwards every connection to `http://localhost:<port>`.
///
/// `auth_token` falls back to `NGROK_AUTHTOKEN`
#[cfg(feature = "tunnel")]
pub async fn open_tunnel(port: u16, auth_token: Option<&str>) -> Result<Tunnel, StartupError> {
    use ngrok::prelude::*;

    let upstream = url::Url::parse(&format!("http://localhost:{port}"))
        .map_err(|e| StartupError::Tunnel(e.to_string()))?;
    let mut builder = ngrok::Session::builder();
    match auth_token {
        Some(token) => builder.authtoken(token.to_string()),
        None => builder.authtoken_from_env(),
    };
    let session = builder
        .connect()
        .await
        .map_err(|e| StartupError::Tunnel(e.to_string()))?;
    let forwarder = session
        .http_endpoint()
        .listen_and_forward(upstream)
        .await
        .map_err(|e| StartupError::Tunnel(e.to_string()))?;
    Ok(Tunnel {
        url: forwarder.url().to_string(),
        _forwarder: Box::new(forwarder),
    })
}

#[cfg(not(feature = "tunnel"))]
pub async fn open_tunnel(_port: u16, _auth_token: Option<&str>) -> Result<Tunnel, StartupError> {
    Err(StartupError::TunnelUnavailable)
}
