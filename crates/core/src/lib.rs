//! dbgkit core: the contract between commands and a debugger host.
//!
//! This crate defines the canonical seam types: a host binding supplies an
//! [`EvalContext`] that evaluates expression text against the debuggee and
//! hands back values; commands only ever see the traits here. Nothing in
//! this crate touches a real process; concrete bindings live in their own
//! crates (`dbgkit-snapshot` ships the capture-file binding).
//!
//! # Usage
//!
//! ```ignore
//! use dbgkit_core::{EvalContext, OutputSink};
//!
//! fn show(ctx: &dyn EvalContext, out: &mut dyn OutputSink, expr: &str) {
//!     match ctx.evaluate(expr) {
//!         Ok(value) => out.line(&format!("{} = {}", expr, value.render())),
//!         Err(_) => out.line(&format!("{} = <error>", expr)),
//!     }
//! }
//! ```

pub mod error;
pub mod eval;
pub mod output;

pub use error::{AccessError, EvalError};
pub use eval::{EvalContext, HostValue, TypeDescriptor};
pub use output::{BufferSink, OutputSink};
