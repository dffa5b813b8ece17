/// Errors raised while assembling a command registry or converting values.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two signatures were supplied for the same command name.
    #[error("duplicate command signature: {0}")]
    DuplicateCommand(String),

    /// A signature declared an empty command name.
    #[error("command name must not be empty")]
    EmptyName,

    /// A JSON value has no argument equivalent.
    #[error("unsupported argument value: {0}")]
    UnsupportedValue(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
