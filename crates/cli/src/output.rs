//! Output sinks for console rendering.

use dbgkit_core::OutputSink;

/// Sink that prints each result line straight to stdout.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}
