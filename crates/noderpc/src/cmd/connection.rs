use std::time::Duration;

use noderpc_client::{connect_with_config, Client, ClientConfig, Credentials};
use noderpc_transport::{HttpConfig, HttpTransport};
use tracing::debug;

use crate::cmd::ConnectArgs;
use crate::exit::{client_error, CliError, CliResult, USAGE};

/// Build an HTTP client from connection flags.
pub fn open(args: &ConnectArgs) -> CliResult<Client<HttpTransport>> {
    let timeout = parse_duration(&args.timeout)?;
    debug!(server = %args.server, user = %args.user, ?timeout, "opening client");

    let config = ClientConfig {
        target: args.server.clone(),
        credentials: Credentials::new(args.user.clone(), args.password.clone()),
        ..ClientConfig::default()
    };
    connect_with_config(config, HttpConfig { timeout })
        .map_err(|err| client_error("connect failed", err))
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}
