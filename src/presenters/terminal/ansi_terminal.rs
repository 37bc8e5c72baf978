use std::io::{self, BufWriter, Stdout, Write};

use tracing::warn;

use crate::core::ports::presentation_sink::PresentationSink;

/// Writes visualisation output to an ANSI-capable terminal.
///
/// The first I/O error is logged and the sink goes quiet; later writes are
/// dropped so a closed pipe never interrupts a benchmark.
#[derive(Debug)]
pub struct AnsiTerminalSink<W: Write> {
    writer: W,
    failed: bool,
}

impl AnsiTerminalSink<BufWriter<Stdout>> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> AnsiTerminalSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            warn!(error = %err, "terminal output failed, dropping further visualisation");
            self.failed = true;
        }
    }
}

impl<W: Write> PresentationSink for AnsiTerminalSink<W> {
    fn write_str(&mut self, text: &str) {
        if self.failed {
            return;
        }
        let result = self.writer.write_all(text.as_bytes());
        self.record(result);
    }

    fn flush(&mut self) {
        if self.failed {
            return;
        }
        let result = self.writer.flush();
        self.record(result);
    }
}
