//! Command signatures for the node JSON-RPC interface.
//!
//! Every remote command is described by a [`Signature`]: the kinds of its
//! required positional arguments, the optional arguments that may follow,
//! and whether a trailing group of same-kind arguments is allowed. The
//! [`CommandRegistry`] maps command names to signatures and is read-only
//! once built.
//!
//! Arguments arrive as [`DynamicValue`]s. Kinds are strict: an integer
//! never satisfies a float slot and a string never satisfies a boolean one.

pub mod error;
pub mod kind;
pub mod registry;
pub mod signature;
pub mod value;

pub use error::{RegistryError, Result};
pub use kind::{Kind, KindSet};
pub use registry::{CommandRegistry, BUILTIN_COMMANDS};
pub use signature::{Arity, Signature};
pub use value::DynamicValue;
