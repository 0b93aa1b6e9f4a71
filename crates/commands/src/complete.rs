//! Field-name completion for partially typed command arguments

use dbgkit_core::EvalContext;

use crate::registry::Completion;

/// Produce field-name candidates for an argument buffer.
///
/// The first whitespace-separated token is the object expression and the
/// last is the prefix being completed. With at most one token the user is
/// still typing the object itself, so the host's symbol completion takes
/// over. Every failure degrades to an empty candidate list; completion
/// runs on every keystroke and must never surface an error.
pub fn complete_fields(ctx: &dyn EvalContext, buffer: &str) -> Completion {
    let tokens: Vec<&str> = buffer.split_whitespace().collect();
    if tokens.len() <= 1 {
        return Completion::Symbols;
    }

    let object_expr = tokens[0];
    let prefix = tokens[tokens.len() - 1];

    let value = match ctx.evaluate(object_expr) {
        Ok(value) => value,
        Err(err) => {
            log::trace!("field completion: \"{}\" failed: {}", object_expr, err);
            return Completion::Candidates(Vec::new());
        }
    };
    let Some(descriptor) = value.descriptor() else {
        return Completion::Candidates(Vec::new());
    };

    let candidates = descriptor
        .field_names()
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .collect();
    Completion::Candidates(candidates)
}
