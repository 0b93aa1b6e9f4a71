// Command output sink - commands emit lines, the host decides where they go

/// Destination for lines a command prints.
///
/// Commands never write to stdout directly; the host passes a sink and
/// chooses presentation (terminal, capture buffer, test assertion).
pub trait OutputSink {
    fn line(&mut self, text: &str);
}

/// Sink that collects lines in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for BufferSink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
