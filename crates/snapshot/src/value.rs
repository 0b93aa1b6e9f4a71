use serde::{Deserialize, Serialize};

use dbgkit_core::{AccessError, HostValue, TypeDescriptor};

/// A captured value.
///
/// `Unavailable` records a read failure at capture time: the member exists
/// in the type, but its bytes were not recoverable (optimized out, unmapped
/// page, truncated core). It renders as `<unavailable>` when nested inside
/// an aggregate and fails evaluation or field access when addressed
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Array(Vec<Value>),
    Struct(StructValue),
    Unavailable { reason: String },
}

/// An aggregate value with named members in declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructValue {
    #[serde(rename = "type")]
    pub type_name: String,
    pub fields: Vec<Field>,
}

/// One named member of a [`StructValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Value {
    /// Debugger-flavored default rendering: scalars bare, strings quoted,
    /// aggregates brace-wrapped.
    pub fn render(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Float(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Value::Bool(b) => b.to_string(),
            Value::Str(s) => format!("{s:?}"),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().map(Value::render).collect();
                format!("{{{}}}", parts.join(", "))
            }
            Value::Struct(s) => {
                let parts: Vec<String> = s
                    .fields
                    .iter()
                    .map(|f| format!("{} = {}", f.name, f.value.render()))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
            Value::Unavailable { .. } => "<unavailable>".to_string(),
        }
    }
}

impl StructValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a member, keeping declared order.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl HostValue for Value {
    fn render(&self) -> String {
        Value::render(self)
    }

    fn descriptor(&self) -> Option<&dyn TypeDescriptor> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }
}

impl TypeDescriptor for StructValue {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    fn get_field(&self, name: &str) -> Result<Box<dyn HostValue>, AccessError> {
        match self.field(name) {
            None => Err(AccessError::new(name, "no such member in captured value")),
            Some(f) => match &f.value {
                Value::Unavailable { reason } => Err(AccessError::new(name, reason.clone())),
                v => Ok(Box::new(v.clone())),
            },
        }
    }
}
