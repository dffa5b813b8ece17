/// Default ceiling on a reply body: 32 MiB.
pub const DEFAULT_MAX_REPLY_SIZE: usize = 32 * 1024 * 1024;

/// Default prefix for request ids.
pub const DEFAULT_ID_PREFIX: &str = "noderpc";

/// Request builder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Ids are rendered as `<id_prefix>-<sequence>`.
    pub id_prefix: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

/// Reply reader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Maximum reply body size in bytes.
    pub max_reply_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_reply_size: DEFAULT_MAX_REPLY_SIZE,
        }
    }
}
