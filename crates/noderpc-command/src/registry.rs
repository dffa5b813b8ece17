use std::collections::HashMap;

use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::kind::{Kind, KindSet};
use crate::signature::Signature;

const S: KindSet = KindSet::of(Kind::String);
const I: KindSet = KindSet::of(Kind::Integer);
const F: KindSet = KindSet::of(Kind::Float);
const B: KindSet = KindSet::of(Kind::Boolean);
const I_OR_S: KindSet = I.or(Kind::String);

/// Signatures of every command the node understands.
pub const BUILTIN_COMMANDS: &[Signature] = &[
    Signature::new("addmultisigaddress")
        .required(&[I, S, S])
        .variadic(Kind::String),
    // Alternate spelling of addmultisigaddress, same contract.
    Signature::new("addmultisignaddress")
        .required(&[I, S, S])
        .variadic(Kind::String),
    Signature::new("addnode").required(&[S]).optional(&[I]),
    Signature::new("backupwallet").required(&[S]),
    Signature::new("createmultisig")
        .required(&[I, S])
        .variadic(Kind::String),
    Signature::new("createrawtransaction").required(&[S, S, S, F]),
    Signature::new("decoderawtransaction").required(&[S]),
    Signature::new("dumpprivkey").required(&[S]),
    Signature::new("encryptwallet").required(&[S]),
    Signature::new("getaccount").required(&[S]),
    Signature::new("getaccountaddress").required(&[S]),
    Signature::new("getaddednodeinfo")
        .required(&[B])
        .optional(&[S]),
    Signature::new("getaddressesbyaccount").required(&[S]),
    Signature::new("getbalance").optional(&[S, I]),
    Signature::new("getbestblockhash"),
    Signature::new("getblock").required(&[S]).optional(&[B]),
    Signature::new("getblockcount"),
    Signature::new("getblockhash").required(&[I]),
    Signature::new("getblocktemplate").optional(&[S]),
    Signature::new("getconnectioncount"),
    Signature::new("getdifficulty"),
    Signature::new("getgenerate"),
    Signature::new("gethashespersec"),
    Signature::new("getinfo"),
    Signature::new("getmemorypool").optional(&[S]),
    Signature::new("getmininginfo"),
    Signature::new("getnetworkhashps").optional(&[I, I]),
    Signature::new("getnewaddress").optional(&[S]),
    Signature::new("getpeerinfo"),
    Signature::new("getrawchangeaddress"),
    Signature::new("getrawmempool").optional(&[B]),
    Signature::new("getrawtransaction")
        .required(&[S])
        .optional(&[I]),
    Signature::new("getreceivedbyaccount")
        .required(&[S])
        .optional(&[I]),
    Signature::new("getreceivedbyaddress")
        .required(&[S])
        .optional(&[I]),
    Signature::new("gettransaction").required(&[S]),
    Signature::new("gettxout").required(&[S, I]).optional(&[B]),
    Signature::new("gettxoutsetinfo"),
    Signature::new("getwork").optional(&[S]),
    Signature::new("help").optional(&[S]),
    Signature::new("importprivkey")
        .required(&[S])
        .optional(&[S, B]),
    Signature::new("keypoolrefill"),
    Signature::new("listaccounts").optional(&[I]),
    Signature::new("listaddressgroupings"),
    Signature::new("listlockunspent"),
    Signature::new("listreceivedbyaccount").optional(&[I, B]),
    Signature::new("listreceivedbyaddress").optional(&[I, B]),
    Signature::new("listsinceblock").optional(&[S, I]),
    Signature::new("listtransactions").optional(&[S, I, I]),
    Signature::new("listunspent").optional(&[I, I]),
    Signature::new("lockunspent").required(&[B, S]),
    Signature::new("move").required(&[S, S, F]).optional(&[I, S]),
    Signature::new("ping"),
    Signature::new("sendfrom")
        .required(&[S, S, F])
        .optional(&[I])
        .variadic(Kind::String),
    // minconf may be omitted, in which case the comment takes its place.
    Signature::new("sendmany")
        .required(&[S, S, F])
        .optional(&[I_OR_S, S]),
    Signature::new("sendrawtransaction").required(&[S]),
    Signature::new("sendtoaddress")
        .required(&[S, F])
        .optional(&[S, S]),
    Signature::new("setaccount").required(&[S, S]),
    Signature::new("setgenerate").required(&[B]).optional(&[I]),
    Signature::new("settxfee").required(&[F]),
    Signature::new("signmessage").required(&[S, S]),
    Signature::new("signrawtransaction").required(&[S, S, S, S, S]),
    Signature::new("stop"),
    Signature::new("submitblock").required(&[S]).optional(&[S]),
    Signature::new("validateaddress").required(&[S]),
    Signature::new("verifychain").optional(&[I, I]),
    Signature::new("verifymessage").required(&[S, S, S]),
    Signature::new("walletlock"),
    Signature::new("walletpassphrase").required(&[S, I]),
    Signature::new("walletpassphrasechange").required(&[S, S]),
];

/// Name-keyed, read-only table of command signatures.
///
/// Built once and shared (typically behind an `Arc`); there is no way to
/// mutate a registry after construction.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Signature>,
}

impl CommandRegistry {
    /// Registry holding [`BUILTIN_COMMANDS`].
    pub fn standard() -> Self {
        let commands: HashMap<_, _> = BUILTIN_COMMANDS
            .iter()
            .map(|signature| (signature.name, *signature))
            .collect();
        debug!(commands = commands.len(), "built standard command registry");
        Self { commands }
    }

    /// Build a registry from an explicit signature list.
    ///
    /// Fails on an empty or repeated command name.
    pub fn from_signatures<I>(signatures: I) -> Result<Self>
    where
        I: IntoIterator<Item = Signature>,
    {
        let mut commands = HashMap::new();
        for signature in signatures {
            if signature.name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if commands.insert(signature.name, signature).is_some() {
                return Err(RegistryError::DuplicateCommand(signature.name.to_string()));
            }
        }
        debug!(commands = commands.len(), "built command registry");
        Ok(Self { commands })
    }

    /// The standard table plus extra commands, which must not collide with
    /// built-in names.
    pub fn standard_with<I>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = Signature>,
    {
        Self::from_signatures(BUILTIN_COMMANDS.iter().copied().chain(extra))
    }

    /// Signature registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<&Signature> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Signatures sorted by command name.
    pub fn signatures(&self) -> Vec<&Signature> {
        let mut signatures: Vec<&Signature> = self.commands.values().collect();
        signatures.sort_unstable_by_key(|signature| signature.name);
        signatures
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
