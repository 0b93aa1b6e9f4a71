// Host evaluation seam - a binding implements these, commands consume them

use crate::error::{AccessError, EvalError};

/// Evaluation context supplied by the host binding.
///
/// Expression text is opaque to callers: what counts as a valid expression
/// is entirely the host's business. Evaluation either produces a displayable
/// value or fails with an [`EvalError`]; it must never mutate debuggee state.
pub trait EvalContext {
    fn evaluate(&self, expr: &str) -> Result<Box<dyn HostValue>, EvalError>;
}

/// A value produced by host evaluation.
pub trait HostValue: std::fmt::Debug {
    /// The host's default string rendering of the value.
    fn render(&self) -> String;

    /// Type descriptor when the value is an aggregate (struct/record-like).
    /// Scalars return `None`.
    fn descriptor(&self) -> Option<&dyn TypeDescriptor>;
}

/// Capability for inspecting an aggregate value's members.
///
/// A descriptor is bound to the value it was obtained from: `get_field`
/// reads that value's member, not just type metadata.
pub trait TypeDescriptor {
    /// Name of the aggregate type, for diagnostics.
    fn type_name(&self) -> &str;

    /// Member names in the type's declared order.
    fn field_names(&self) -> Vec<String>;

    /// Read one member by name.
    ///
    /// Fails with [`AccessError`] when the member cannot be produced:
    /// unreadable at capture time, or not actually backed by this value.
    fn get_field(&self, name: &str) -> Result<Box<dyn HostValue>, AccessError>;
}
