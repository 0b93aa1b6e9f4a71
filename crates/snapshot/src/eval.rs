// Path evaluation - resolves `var.member.member` expressions against a capture

use dbgkit_core::{EvalContext, EvalError, HostValue};

use crate::snapshot::ProcessSnapshot;
use crate::value::Value;

impl EvalContext for ProcessSnapshot {
    fn evaluate(&self, expr: &str) -> Result<Box<dyn HostValue>, EvalError> {
        let segments = split_path(expr)?;

        let root = segments[0];
        let mut current = self
            .get(root)
            .ok_or_else(|| EvalError::UndefinedSymbol(root.to_string()))?;

        // Path walked so far, for error reporting.
        let mut walked = root.to_string();
        for seg in &segments[1..] {
            match current {
                Value::Struct(s) => {
                    let field = s.field(seg).ok_or_else(|| EvalError::NoSuchMember {
                        type_name: s.type_name.clone(),
                        member: seg.to_string(),
                    })?;
                    current = &field.value;
                }
                Value::Unavailable { reason } => {
                    return Err(EvalError::Unreadable(reason.clone()));
                }
                _ => return Err(EvalError::NotAggregate(walked)),
            }
            walked.push('.');
            walked.push_str(seg);
        }

        match current {
            Value::Unavailable { reason } => Err(EvalError::Unreadable(reason.clone())),
            v => Ok(Box::new(v.clone())),
        }
    }
}

/// Split an expression into path segments, validating each.
fn split_path(expr: &str) -> Result<Vec<&str>, EvalError> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(EvalError::Parse("empty expression".to_string()));
    }

    let segments: Vec<&str> = trimmed.split('.').collect();
    for seg in &segments {
        if seg.is_empty() {
            return Err(EvalError::Parse(format!(
                "empty path segment in \"{trimmed}\""
            )));
        }
        if !is_identifier(seg) {
            return Err(EvalError::Parse(format!(
                "\"{seg}\" is not a variable or member name"
            )));
        }
    }
    Ok(segments)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
