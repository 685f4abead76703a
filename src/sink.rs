//! Output sinks for forwarded log lines
//!
//! The ring log forwards every insertion to a sink so buffering can be
//! tested without capturing real output. The default sink routes lines to
//! the tracing event matching the entry's severity.

use crate::buffer::Severity;

/// Destination for forwarded `[LEVEL] message` lines
///
/// Writes are fire-and-forget; implementations must not fail.
pub trait LogSink: Send + Sync {
    /// Write one formatted line at the given severity
    fn write(&self, level: Severity, line: &str);
}

/// Sink that emits lines as tracing events at the matching level
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: Severity, line: &str) {
        match level {
            Severity::Debug => tracing::debug!("{}", line),
            Severity::Info => tracing::info!("{}", line),
            Severity::Warn => tracing::warn!("{}", line),
            Severity::Error => tracing::error!("{}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Writer that collects subscriber output into a shared buffer
    #[derive(Clone)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut out) = self.0.lock() {
                out.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_console_sink_emits_tagged_events() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(CaptureWriter(Arc::clone(&captured)))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            ConsoleSink.write(Severity::Debug, "[DEBUG] first");
            ConsoleSink.write(Severity::Info, "[INFO] second");
            ConsoleSink.write(Severity::Warn, "[WARN] third");
            ConsoleSink.write(Severity::Error, "[ERROR] fourth");
        });

        let output = String::from_utf8(captured.lock().unwrap().clone()).unwrap();
        assert!(output.contains("DEBUG"));
        assert!(output.contains("[DEBUG] first"));
        assert!(output.contains("[INFO] second"));
        assert!(output.contains("[WARN] third"));
        assert!(output.contains("[ERROR] fourth"));
    }
}
