use noderpc_message::{BuilderConfig, ReaderConfig};
use noderpc_transport::Credentials;

/// Default node RPC endpoint.
pub const DEFAULT_TARGET: &str = "127.0.0.1:8332";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Node address handed to the transport.
    pub target: String,
    /// RPC credentials handed to the transport.
    pub credentials: Credentials,
    /// Request id generation.
    pub builder: BuilderConfig,
    /// Reply size limit.
    pub reader: ReaderConfig,
    /// Reject replies whose id differs from the request id.
    pub check_reply_id: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            credentials: Credentials::default(),
            builder: BuilderConfig::default(),
            reader: ReaderConfig::default(),
            check_reply_id: true,
        }
    }
}
