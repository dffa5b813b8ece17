use clap::{Args, Subcommand};
use noderpc_client::DEFAULT_TARGET;
use noderpc_command::DynamicValue;
use noderpc_message::DEFAULT_ID_PREFIX;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod build;
pub mod call;
pub mod commands;
pub mod connection;
pub mod raw;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a call and print its request envelope.
    Build(BuildArgs),
    /// List known commands and their argument signatures.
    Commands(CommandsArgs),
    /// Validate a call, send it to the node and print the result.
    Call(CallArgs),
    /// Send a pre-serialized JSON-RPC request.
    Raw(RawArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Build(args) => build::run(args, format),
        Command::Commands(args) => commands::run(args, format),
        Command::Call(args) => call::run(args, format),
        Command::Raw(args) => raw::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Turn positional CLI words into dynamic values.
pub fn parse_params(words: &[String]) -> Vec<DynamicValue> {
    words
        .iter()
        .map(|word| DynamicValue::parse_literal(word))
        .collect()
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Command name, e.g. getblockhash.
    pub command: String,
    /// Arguments. Integers, floats and true/false are typed; quote a JSON
    /// string ('"1"') to force a string.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub params: Vec<String>,
    /// Prefix for the request id.
    #[arg(long, default_value = DEFAULT_ID_PREFIX)]
    pub id_prefix: String,
}

#[derive(Args, Debug)]
pub struct CommandsArgs {
    /// Show only this command.
    pub name: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    /// Node RPC address (host:port or URL).
    #[arg(long, env = "NODERPC_SERVER", default_value = DEFAULT_TARGET)]
    pub server: String,
    /// RPC user name.
    #[arg(long, env = "NODERPC_USER", default_value = "")]
    pub user: String,
    /// RPC password.
    #[arg(
        long,
        env = "NODERPC_PASSWORD",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,
    /// Request timeout (e.g. 30s, 500ms).
    #[arg(long, default_value = "30s")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct CallArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
    /// Command name, e.g. getblockcount.
    pub command: String,
    /// Arguments, typed the same way as for `build`.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub params: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RawArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
    /// Complete JSON-RPC request object.
    #[arg(long)]
    pub json: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
