use noderpc_client::ClientError;

use crate::cmd::{connection, RawArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_result, OutputFormat};

pub fn run(args: RawArgs, format: OutputFormat) -> CliResult<i32> {
    let client = connection::open(&args.connect)?;

    let reply = client
        .send_raw(args.json.as_bytes())
        .map_err(|err| client_error("raw request failed", err))?;
    let result = reply
        .into_result()
        .map_err(|err| client_error("raw request failed", ClientError::Rpc(err)))?;

    print_result(&result, format);
    Ok(SUCCESS)
}
