use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Prefix shared by every workspace crate's log target.
const WORKSPACE_TARGET: &str = "noderpc";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// `noderpc_*` targets log at `level`; HTTP stack crates never go below warn.
pub fn log_filter(level: LogLevel) -> Targets {
    let level = level.as_filter();
    Targets::new()
        .with_target(WORKSPACE_TARGET, level)
        .with_default(level.min(LevelFilter::WARN))
}

/// Install the stderr subscriber. Stdout stays reserved for command output.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let registry = tracing_subscriber::registry().with(log_filter(level));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = registry.with(layer).try_init();
        }
        LogFormat::Json => {
            let _ = registry.with(layer.json()).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;

    #[test]
    fn workspace_targets_follow_requested_level() {
        let filter = log_filter(LogLevel::Debug);
        assert!(filter.would_enable("noderpc_message::builder", &Level::DEBUG));
        assert!(filter.would_enable("noderpc_transport::http", &Level::DEBUG));
        assert!(filter.would_enable("noderpc::cmd::connection", &Level::DEBUG));
        assert!(!filter.would_enable("noderpc_client::client", &Level::TRACE));
    }

    #[test]
    fn dependencies_are_capped_at_warn() {
        let filter = log_filter(LogLevel::Trace);
        assert!(!filter.would_enable("reqwest::connect", &Level::DEBUG));
        assert!(!filter.would_enable("hyper_util::client", &Level::INFO));
        assert!(filter.would_enable("reqwest::connect", &Level::WARN));
    }

    #[test]
    fn quieter_level_applies_everywhere() {
        let filter = log_filter(LogLevel::Error);
        assert!(!filter.would_enable("noderpc_client::client", &Level::WARN));
        assert!(!filter.would_enable("reqwest::connect", &Level::WARN));
        assert!(filter.would_enable("reqwest::connect", &Level::ERROR));
    }
}
