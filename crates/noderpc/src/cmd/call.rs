use crate::cmd::{connection, parse_params, CallArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_result, OutputFormat};

pub fn run(args: CallArgs, format: OutputFormat) -> CliResult<i32> {
    let client = connection::open(&args.connect)?;
    let params = parse_params(&args.params);

    let result = client
        .call(&args.command, params)
        .map_err(|err| client_error(&format!("{} failed", args.command), err))?;

    print_result(&result, format);
    Ok(SUCCESS)
}
