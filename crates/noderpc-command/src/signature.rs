use std::fmt;

use serde::Serialize;

use crate::kind::{Kind, KindSet};

/// Argument contract for one remote command.
///
/// Arguments are positional: `required` slots first, then any prefix of
/// `optional`, then (when `variadic` is set) any number of values of that
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub name: &'static str,
    pub required: &'static [KindSet],
    pub optional: &'static [KindSet],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variadic: Option<Kind>,
}

impl Signature {
    /// A command that takes no arguments.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            required: &[],
            optional: &[],
            variadic: None,
        }
    }

    pub const fn required(mut self, kinds: &'static [KindSet]) -> Self {
        self.required = kinds;
        self
    }

    pub const fn optional(mut self, kinds: &'static [KindSet]) -> Self {
        self.optional = kinds;
        self
    }

    pub const fn variadic(mut self, kind: Kind) -> Self {
        self.variadic = Some(kind);
        self
    }

    /// Fewest arguments accepted.
    pub fn min_args(&self) -> usize {
        self.required.len()
    }

    /// Most arguments accepted, or `None` for a variadic tail.
    pub fn max_args(&self) -> Option<usize> {
        match self.variadic {
            Some(_) => None,
            None => Some(self.required.len() + self.optional.len()),
        }
    }

    /// Kinds accepted at `position`, or `None` past the end of a
    /// non-variadic signature.
    pub fn expected_at(&self, position: usize) -> Option<KindSet> {
        let fixed = self.required.len();
        if position < fixed {
            return Some(self.required[position]);
        }
        if let Some(kind) = self.optional.get(position - fixed) {
            return Some(*kind);
        }
        self.variadic.map(KindSet::of)
    }

    pub fn arity(&self) -> Arity {
        Arity {
            min: self.min_args(),
            max: self.max_args(),
        }
    }

    /// One-line usage string, e.g. `sendfrom <string> <string> <float> [integer] [string...]`.
    pub fn usage(&self) -> String {
        let mut out = self.name.to_string();
        for kind in self.required {
            out.push_str(&format!(" <{kind}>"));
        }
        for kind in self.optional {
            out.push_str(&format!(" [{kind}]"));
        }
        if let Some(kind) = self.variadic {
            out.push_str(&format!(" [{kind}...]"));
        }
        out
    }
}

/// Accepted argument count range for a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{}..={max}", self.min),
            None => write!(f, "{}..", self.min),
        }
    }
}
