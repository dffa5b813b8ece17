use noderpc_command::CommandRegistry;

use crate::cmd::CommandsArgs;
use crate::exit::{CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_signatures, OutputFormat};

pub fn run(args: CommandsArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = CommandRegistry::standard();

    let signatures = match &args.name {
        Some(name) => {
            let signature = registry
                .lookup(name)
                .ok_or_else(|| CliError::new(USAGE, format!("unknown command: {name}")))?;
            vec![signature]
        }
        None => registry.signatures(),
    };

    print_signatures(&signatures, format);
    Ok(SUCCESS)
}
