use std::sync::Arc;

use noderpc_command::CommandRegistry;
use noderpc_message::{BuilderConfig, MessageBuilder};

use crate::cmd::{parse_params, BuildArgs};
use crate::exit::{message_error, CliResult, SUCCESS};
use crate::output::{print_envelope, OutputFormat};

pub fn run(args: BuildArgs, format: OutputFormat) -> CliResult<i32> {
    let builder = MessageBuilder::with_config(
        Arc::new(CommandRegistry::standard()),
        BuilderConfig {
            id_prefix: args.id_prefix,
        },
    );

    let params = parse_params(&args.params);
    let envelope = builder
        .build(&args.command, params)
        .map_err(|err| message_error("invalid request", err))?;
    let wire = envelope
        .to_value()
        .map_err(|err| message_error("invalid request", err))?;

    print_envelope(&envelope, &wire, format);
    Ok(SUCCESS)
}
