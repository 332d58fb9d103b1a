//! Message emission: encoder, emitter, periodic runner and trigger adapter.

pub mod encoder;
pub mod runner;
pub mod trigger;

use std::io::{self, Write};
use std::time::Duration;

use crate::app::{DummylogError, Result};
use crate::domain::Format;
use crate::sentence::{HipsterSentence, SentenceSource};

pub use encoder::encode;
pub use runner::run;
pub use trigger::TriggerSink;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Immutable settings of an [`Emitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterConfig {
    pub format: Format,
    /// Fixed pause between two emissions of the periodic runner.
    pub interval: Duration,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            format: Format::Text,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Writes fabricated sentences to an exclusively owned sink.
pub struct Emitter {
    config: EmitterConfig,
    sink: Box<dyn Write + Send>,
    source: Box<dyn SentenceSource>,
}

impl Emitter {
    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::default()
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Emit one line into the configured sink.
    pub fn emit(&mut self) -> Result<()> {
        let line = self.next_line()?;
        write_line(&mut self.sink, &line)?;
        tracing::trace!(bytes = line.len(), format = %self.config.format, "Emitted message");
        Ok(())
    }

    /// Emit one line into `sink` instead of the configured one.
    pub fn emit_into(&mut self, sink: &mut dyn Write) -> Result<()> {
        let line = self.next_line()?;
        write_line(sink, &line)
    }

    fn next_line(&mut self) -> Result<Vec<u8>> {
        let sentence = self.source.next_sentence();
        encode(&sentence, self.config.format)
    }
}

fn write_line(sink: &mut dyn Write, line: &[u8]) -> Result<()> {
    sink.write_all(line).map_err(DummylogError::Write)?;
    sink.flush().map_err(DummylogError::Write)
}

/// Builds an [`Emitter`]. Setters apply in call order; the last call for a
/// field wins.
#[derive(Default)]
pub struct EmitterBuilder {
    config: EmitterConfig,
    sink: Option<Box<dyn Write + Send>>,
    source: Option<Box<dyn SentenceSource>>,
}

impl EmitterBuilder {
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.sink = Some(Box::new(writer));
        self
    }

    pub fn source<S: SentenceSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Defaults: text format, one second interval, stdout, hipster sentences.
    pub fn build(self) -> Emitter {
        Emitter {
            config: self.config,
            sink: self.sink.unwrap_or_else(|| Box::new(io::stdout())),
            source: self
                .source
                .unwrap_or_else(|| Box::new(HipsterSentence::default())),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory sink so tests can read what the emitter wrote.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink whose every write fails like a closed pipe.
    pub struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn fixed(sentence: &'static str) -> impl FnMut() -> String + Send {
        move || sentence.to_string()
    }
}
