/// Write-only output channel that kernels draw their visualisation to.
///
/// Presentation is best-effort: implementations swallow their own I/O
/// failures so a broken terminal never changes what a kernel computes or
/// how long it reports.
pub trait PresentationSink {
    fn write_str(&mut self, text: &str);

    fn flush(&mut self);
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn write_str(&mut self, text: &str) {
        (**self).write_str(text);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Discards everything; used for timed runs without visualisation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    #[inline]
    fn write_str(&mut self, _text: &str) {}

    #[inline]
    fn flush(&mut self) {}
}
