use noderpc_command::DynamicValue;

/// Build an argument vector from native values.
///
/// ```
/// use noderpc_message::{args, DynamicValue};
///
/// let params = args!["acct", "addr", 0.5, 6];
/// assert_eq!(params[2], DynamicValue::Float(0.5));
/// assert_eq!(params[3], DynamicValue::Integer(6));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::DynamicValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::DynamicValue::from($value)),+]
    };
}

/// Fluent argument list with one method per kind.
///
/// The method picked at the call site fixes the kind, so an amount written
/// as `.float(1.0)` can never turn into an integer slot by accident.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgList(Vec<DynamicValue>);

impl ArgList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.0.push(DynamicValue::String(value.into()));
        self
    }

    pub fn integer(mut self, value: i64) -> Self {
        self.0.push(DynamicValue::Integer(value));
        self
    }

    pub fn float(mut self, value: f64) -> Self {
        self.0.push(DynamicValue::Float(value));
        self
    }

    pub fn boolean(mut self, value: bool) -> Self {
        self.0.push(DynamicValue::Boolean(value));
        self
    }

    /// Append an optional value only when present.
    pub fn maybe(mut self, value: Option<impl Into<DynamicValue>>) -> Self {
        if let Some(value) = value {
            self.0.push(value.into());
        }
        self
    }

    pub fn push(&mut self, value: impl Into<DynamicValue>) {
        self.0.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[DynamicValue] {
        &self.0
    }
}

impl From<ArgList> for Vec<DynamicValue> {
    fn from(list: ArgList) -> Self {
        list.0
    }
}

impl FromIterator<DynamicValue> for ArgList {
    fn from_iter<I: IntoIterator<Item = DynamicValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
