use noderpc_transport::{HttpConfig, HttpTransport};
use tracing::debug;

use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;

/// Create a client that talks to the node over HTTP.
///
/// No connection is opened here; the first call does that.
pub fn connect(config: ClientConfig) -> Result<Client<HttpTransport>> {
    connect_with_config(config, HttpConfig::default())
}

/// Create an HTTP client with explicit transport configuration.
pub fn connect_with_config(
    config: ClientConfig,
    http_config: HttpConfig,
) -> Result<Client<HttpTransport>> {
    noderpc_transport::endpoint(&config.target)?;
    let transport = HttpTransport::with_config(http_config)?;
    debug!(
        target_addr = %config.target,
        timeout_ms = http_config.timeout.as_millis() as u64,
        "http client ready"
    );
    Ok(Client::new(transport, config))
}
