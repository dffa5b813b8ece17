use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use noderpc_command::{CommandRegistry, DynamicValue, Signature};
use tracing::debug;

use crate::config::BuilderConfig;
use crate::envelope::RequestEnvelope;
use crate::error::{MessageError, Result};

/// Validates calls against the command registry and produces envelopes.
///
/// `build` takes `&self`; ids come from an atomic counter, so one builder
/// can be shared across threads and every call still gets a distinct id.
#[derive(Debug)]
pub struct MessageBuilder {
    registry: Arc<CommandRegistry>,
    config: BuilderConfig,
    sequence: AtomicU64,
}

impl MessageBuilder {
    /// Create a builder with default configuration.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self::with_config(registry, BuilderConfig::default())
    }

    /// Create a builder with explicit configuration.
    pub fn with_config(registry: Arc<CommandRegistry>, config: BuilderConfig) -> Self {
        Self {
            registry,
            config,
            sequence: AtomicU64::new(0),
        }
    }

    /// Validate `args` against the signature of `name` and wrap them in a
    /// request envelope with a fresh id.
    pub fn build(&self, name: &str, args: impl Into<Vec<DynamicValue>>) -> Result<RequestEnvelope> {
        let args = args.into();
        match self.check(name, &args) {
            Ok(_) => {
                let id = self.next_id();
                debug!(method = name, params = args.len(), id = %id, "built request");
                Ok(RequestEnvelope::new(name.to_string(), args, id))
            }
            Err(err) => {
                debug!(method = name, params = args.len(), error = %err, "rejected request");
                Err(err)
            }
        }
    }

    /// Validate a call without building an envelope or consuming an id.
    pub fn check(&self, name: &str, args: &[DynamicValue]) -> Result<&Signature> {
        if name.is_empty() {
            return Err(MessageError::EmptyMethod);
        }
        let signature = self
            .registry
            .lookup(name)
            .ok_or_else(|| MessageError::UnknownCommand(name.to_string()))?;
        validate_args(signature, args)?;
        Ok(signature)
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    fn next_id(&self) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{seq}", self.config.id_prefix)
    }
}

/// Positional arity and kind check of `args` against `signature`.
pub fn validate_args(signature: &Signature, args: &[DynamicValue]) -> Result<()> {
    let supplied = args.len();
    let required = signature.required.len();
    let fixed = required + signature.optional.len();

    if supplied < required {
        return Err(MessageError::TooFewArguments {
            command: signature.name.to_string(),
            got: supplied,
            expected: signature.arity(),
        });
    }
    if signature.variadic.is_none() && supplied > fixed {
        return Err(MessageError::TooManyArguments {
            command: signature.name.to_string(),
            got: supplied,
            expected: signature.arity(),
        });
    }

    for (position, arg) in args.iter().enumerate() {
        // Arity was checked above, so every position has a slot.
        let Some(expected) = signature.expected_at(position) else {
            break;
        };
        let actual = arg.kind();
        if !expected.contains(actual) {
            return Err(MessageError::TypeMismatch {
                command: signature.name.to_string(),
                position,
                expected,
                actual,
            });
        }
        if let DynamicValue::Float(value) = arg {
            if !value.is_finite() {
                return Err(MessageError::NonFiniteFloat {
                    command: signature.name.to_string(),
                    position,
                    value: *value,
                });
            }
        }
    }

    Ok(())
}
