//! `dm` - evaluate and print several expressions in one line

use dbgkit_core::{EvalContext, OutputSink};

use crate::registry::{Command, CommandCategory, CommandError};

const USAGE: &str = "Usage: dm <expr>[, <expr> ...]";

/// Batch display command.
///
/// Splits its argument on commas, evaluates every expression in input
/// order, and prints one line per expression. An expression that fails is
/// reported inline as `<error>` and never aborts the rest of the batch.
pub struct DisplayMany;

impl Command for DisplayMany {
    fn name(&self) -> &'static str {
        "dm"
    }

    fn category(&self) -> CommandCategory {
        CommandCategory::Data
    }

    fn summary(&self) -> &'static str {
        "Evaluate and print several expressions at once"
    }

    fn usage(&self) -> &'static str {
        USAGE
    }

    fn invoke(
        &self,
        ctx: &dyn EvalContext,
        out: &mut dyn OutputSink,
        arg: &str,
    ) -> Result<(), CommandError> {
        if arg.trim().is_empty() {
            return Err(CommandError::Usage(USAGE));
        }
        for part in arg.split(',') {
            let expr = part.trim();
            match ctx.evaluate(expr) {
                Ok(value) => out.line(&format!("{} = {}", expr, value.render())),
                Err(err) => {
                    log::debug!("dm: \"{}\" failed: {}", expr, err);
                    out.line(&format!("{} = <error>", expr));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::basic_capture;
    use dbgkit_core::BufferSink;

    fn run(arg: &str) -> Result<Vec<String>, CommandError> {
        let snapshot = basic_capture();
        let mut out = BufferSink::new();
        DisplayMany.invoke(&snapshot, &mut out, arg)?;
        Ok(out.lines)
    }

    #[test]
    fn test_prints_value_per_expression() {
        let lines = run("x, word").unwrap();
        assert_eq!(lines, vec!["x = 5", "word = \"hi\""]);
    }

    #[test]
    fn test_bad_expression_reported_inline() {
        let lines = run("x, y").unwrap();
        assert_eq!(lines, vec!["x = 5", "y = <error>"]);
    }

    #[test]
    fn test_failure_never_aborts_the_batch() {
        let lines = run("nope, x, also.missing, obj.foo").unwrap();
        assert_eq!(
            lines,
            vec![
                "nope = <error>",
                "x = 5",
                "also.missing = <error>",
                "obj.foo = 1",
            ]
        );
    }

    #[test]
    fn test_whitespace_around_expressions_is_trimmed() {
        let lines = run("  x ,  obj.baz  ").unwrap();
        assert_eq!(lines, vec!["x = 5", "obj.baz = 2"]);
    }

    #[test]
    fn test_empty_segment_is_an_inline_error() {
        let lines = run("x,,obj.foo").unwrap();
        assert_eq!(lines, vec!["x = 5", " = <error>", "obj.foo = 1"]);
    }

    #[test]
    fn test_struct_values_render_with_braces() {
        let lines = run("point").unwrap();
        assert_eq!(lines, vec!["point = {x = 1, y = 2}"]);
    }

    #[test]
    fn test_empty_argument_is_a_usage_error() {
        let err = run("   ").unwrap_err();
        assert_eq!(err.to_string(), "Usage: dm <expr>[, <expr> ...]");
    }
}
