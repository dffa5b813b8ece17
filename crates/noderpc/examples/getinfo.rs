//! Ask a node for its block count and chain summary.
//!
//! Run with:
//!   NODERPC_USER=rpcuser NODERPC_PASSWORD=secret \
//!     cargo run --example getinfo --features http

use noderpc::args;
use noderpc::client::{connect, ClientConfig, Credentials};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let target =
        std::env::var("NODERPC_SERVER").unwrap_or_else(|_| "127.0.0.1:8332".to_string());
    let credentials = Credentials::new(
        std::env::var("NODERPC_USER").unwrap_or_default(),
        std::env::var("NODERPC_PASSWORD").unwrap_or_default(),
    );

    let client = connect(ClientConfig {
        target,
        credentials,
        ..ClientConfig::default()
    })?;

    let height: u64 = client.call_as("getblockcount", args![])?;
    println!("height: {height}");

    let info = client.call("getinfo", args![])?;
    println!("{info:#}");
    Ok(())
}
