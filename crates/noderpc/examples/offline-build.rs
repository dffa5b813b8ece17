//! Build and validate requests without talking to a node.
//!
//! Run with:
//!   cargo run --example offline-build

use std::sync::Arc;

use noderpc::args;
use noderpc::command::CommandRegistry;
use noderpc::message::{ArgList, MessageBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builder = MessageBuilder::new(Arc::new(CommandRegistry::standard()));

    let request = builder.build("getblockhash", args![250000])?;
    println!("{}", String::from_utf8_lossy(&request.encode()?));

    let params = ArgList::new()
        .string("")
        .string("mzABC")
        .float(0.25)
        .integer(6)
        .string("memo");
    let request = builder.build("sendfrom", params)?;
    println!("{}", String::from_utf8_lossy(&request.encode()?));

    // An integer where an amount belongs is refused before encoding.
    match builder.build("sendfrom", args!["", "mzABC", 1]) {
        Ok(_) => eprintln!("unexpectedly accepted"),
        Err(err) => eprintln!("rejected: {err}"),
    }

    Ok(())
}
