use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use noderpc_command::Signature;
use noderpc_message::RequestEnvelope;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct CommandOutput<'a> {
    #[serde(flatten)]
    signature: &'a Signature,
    arity: String,
    usage: String,
}

impl<'a> CommandOutput<'a> {
    fn new(signature: &'a Signature) -> Self {
        Self {
            signature,
            arity: signature.arity().to_string(),
            usage: signature.usage(),
        }
    }
}

pub fn print_envelope(envelope: &RequestEnvelope, wire: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{wire}"),
        OutputFormat::Pretty => println!("{wire:#}"),
        OutputFormat::Table => {
            let params = Value::from(
                envelope
                    .params()
                    .iter()
                    .cloned()
                    .map(Value::from)
                    .collect::<Vec<_>>(),
            );
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "METHOD", "PARAMS"])
                .add_row(vec![
                    envelope.id().to_string(),
                    envelope.method().to_string(),
                    params.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Raw => print_raw(wire.to_string().as_bytes()),
    }
}

pub fn print_signatures(signatures: &[&Signature], format: OutputFormat) {
    match format {
        OutputFormat::Json | OutputFormat::Pretty => {
            let out: Vec<CommandOutput<'_>> =
                signatures.iter().map(|s| CommandOutput::new(s)).collect();
            let text = if matches!(format, OutputFormat::Pretty) {
                serde_json::to_string_pretty(&out)
            } else {
                serde_json::to_string(&out)
            };
            println!("{}", text.unwrap_or_else(|_| "[]".to_string()));
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["COMMAND", "ARGS", "USAGE"]);
            for signature in signatures {
                table.add_row(vec![
                    signature.name.to_string(),
                    signature.arity().to_string(),
                    signature.usage(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Raw => {
            for signature in signatures {
                println!("{}", signature.name);
            }
        }
    }
}

pub fn print_result(result: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{result}"),
        OutputFormat::Pretty => println!("{result:#}"),
        OutputFormat::Table => match result {
            Value::Object(fields) => {
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(vec!["FIELD", "VALUE"]);
                for (key, value) in fields {
                    table.add_row(vec![key.clone(), scalar_text(value)]);
                }
                println!("{table}");
            }
            other => println!("{}", scalar_text(other)),
        },
        OutputFormat::Raw => {
            print_raw(scalar_text(result).as_bytes());
            println!();
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// Strings without quotes, everything else as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use noderpc_command::CommandRegistry;
    use serde_json::json;

    use super::*;

    #[test]
    fn scalar_text_unquotes_strings() {
        assert_eq!(scalar_text(&json!("000000abc")), "000000abc");
        assert_eq!(scalar_text(&json!(12)), "12");
        assert_eq!(scalar_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn command_output_carries_signature_and_usage() {
        let registry = CommandRegistry::standard();
        let signature = registry.lookup("getblockhash").unwrap();
        let out = serde_json::to_value(CommandOutput::new(signature)).unwrap();
        assert_eq!(out["name"], "getblockhash");
        assert_eq!(out["arity"], "1");
        assert_eq!(out["usage"], "getblockhash <integer>");
        assert_eq!(out["required"], json!([["integer"]]));
    }
}
