//! `mbr` - inspect selected members of an aggregate value

use std::collections::HashSet;

use dbgkit_core::{EvalContext, OutputSink};

use crate::complete::complete_fields;
use crate::registry::{Command, CommandCategory, CommandError, Completion};

const USAGE: &str = "Usage: mbr <obj> [field1 field2 ...]";

/// Member inspection command.
///
/// The first whitespace-separated token is the target expression; the
/// remaining tokens name the fields to print. With no field names, every
/// field is printed in declared order. A target that fails to evaluate or
/// has no fields aborts the command; a bad field name only produces a
/// `<no such field>` line.
pub struct Members;

impl Command for Members {
    fn name(&self) -> &'static str {
        "mbr"
    }

    fn category(&self) -> CommandCategory {
        CommandCategory::User
    }

    fn summary(&self) -> &'static str {
        "Inspect members of an aggregate value"
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
        let mut tokens = arg.split_whitespace();
        let Some(target) = tokens.next() else {
            return Err(CommandError::Usage(USAGE));
        };

        let value = ctx.evaluate(target).map_err(|reason| CommandError::Eval {
            expr: target.to_string(),
            reason,
        })?;
        let Some(descriptor) = value.descriptor() else {
            return Err(CommandError::NotAggregate {
                expr: target.to_string(),
            });
        };

        // Field set is read once; every membership check reuses it.
        let declared = descriptor.field_names();
        let field_set: HashSet<&str> = declared.iter().map(String::as_str).collect();
        log::debug!(
            "mbr: {} declares {} field(s)",
            descriptor.type_name(),
            declared.len()
        );

        let requested: Vec<&str> = tokens.collect();
        let names: Vec<&str> = if requested.is_empty() {
            declared.iter().map(String::as_str).collect()
        } else {
            requested
        };

        for name in names {
            if !field_set.contains(name) {
                out.line(&format!("{} = <no such field>", name));
                continue;
            }
            match descriptor.get_field(name) {
                Ok(field) => out.line(&format!("{} = {}", name, field.render())),
                Err(err) => {
                    log::debug!("mbr: {}", err);
                    out.line(&format!("{} = <error>", name));
                }
            }
        }
        Ok(())
    }

    fn complete(&self, ctx: &dyn EvalContext, buffer: &str) -> Completion {
        complete_fields(ctx, buffer)
    }
}
