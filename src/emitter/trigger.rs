//! Write-side adapter over [`Emitter`].
//!
//! A [`TriggerSink`] looks like a byte sink but is not one: whatever is
//! handed to [`TriggerSink::trigger`] is discarded, one fabricated message is
//! generated into a fresh buffer, and the length of *that* message is
//! returned. The count therefore has nothing to do with the input length.
//! It is deliberately not an [`std::io::Write`] impl.

use crate::app::Result;
use crate::emitter::Emitter;

pub trait TriggerSink {
    /// Generate one message and report its encoded length. `input` is ignored.
    fn trigger(&mut self, input: &[u8]) -> Result<usize>;
}

impl TriggerSink for Emitter {
    fn trigger(&mut self, _input: &[u8]) -> Result<usize> {
        let mut buffer = Vec::new();
        self.emit_into(&mut buffer)?;
        Ok(buffer.len())
    }
}
