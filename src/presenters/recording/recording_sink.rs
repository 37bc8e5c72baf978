use crate::core::ports::presentation_sink::PresentationSink;

/// Captures everything written to it in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    output: String,
    flushes: usize,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl PresentationSink for RecordingSink {
    fn write_str(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_writes_and_flushes() {
        let mut sink = RecordingSink::new();

        sink.write_str("ab");
        sink.write_str("c\n");
        sink.flush();

        assert_eq!(sink.output(), "abc\n");
        assert_eq!(sink.flushes(), 1);
        assert_eq!(sink.into_output(), "abc\n");
    }
}
