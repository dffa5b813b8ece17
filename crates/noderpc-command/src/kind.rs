use std::fmt;

use serde::{Serialize, Serializer};

/// Runtime category of an RPC argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Integer,
    Float,
    Boolean,
}

impl Kind {
    /// Every kind, in display order.
    pub const ALL: [Kind; 4] = [Kind::String, Kind::Integer, Kind::Float, Kind::Boolean];

    /// Lowercase name used in error messages and listings.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Kind::String => 0b0001,
            Kind::Integer => 0b0010,
            Kind::Float => 0b0100,
            Kind::Boolean => 0b1000,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of kinds accepted by a single argument slot.
///
/// Nearly every slot accepts exactly one kind. A union is only used where
/// the node overloads a position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindSet(u8);

impl KindSet {
    /// A slot accepting exactly `kind`.
    pub const fn of(kind: Kind) -> Self {
        Self(kind.bit())
    }

    /// Extend the set with another accepted kind.
    pub const fn or(self, kind: Kind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub const fn contains(self, kind: Kind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Accepted kinds in display order.
    pub fn kinds(self) -> impl Iterator<Item = Kind> {
        Kind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }
}

impl From<Kind> for KindSet {
    fn from(kind: Kind) -> Self {
        Self::of(kind)
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, kind) in self.kinds().enumerate() {
            if idx > 0 {
                f.write_str(" or ")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

impl Serialize for KindSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.kinds())
    }
}
