use std::fmt;

/// Why an expression failed to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression root names no symbol in the current context.
    UndefinedSymbol(String),
    /// A path step names a member the aggregate's type does not have.
    NoSuchMember { type_name: String, member: String },
    /// A path step tried to traverse into a non-aggregate value.
    NotAggregate(String),
    /// The value (or an intermediate step) was not readable.
    Unreadable(String),
    /// The expression is malformed for this host's expression language.
    Parse(String),
    /// Any other host-reported evaluation failure.
    Host(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedSymbol(name) => {
                write!(f, "no symbol \"{name}\" in current context")
            }
            Self::NoSuchMember { type_name, member } => {
                write!(f, "type {type_name} has no member \"{member}\"")
            }
            Self::NotAggregate(expr) => write!(f, "\"{expr}\" is not an aggregate value"),
            Self::Unreadable(reason) => write!(f, "value is unavailable: {reason}"),
            Self::Parse(msg) => write!(f, "cannot parse expression: {msg}"),
            Self::Host(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EvalError {}

/// A member exists in the field set but could not be read.
///
/// Kept distinct from [`EvalError`] so callers can tell "field doesn't
/// exist" apart from "field exists but access failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError {
    pub field: String,
    pub reason: String,
}

impl AccessError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read field \"{}\": {}", self.field, self.reason)
    }
}

impl std::error::Error for AccessError {}
