//! Serialises a sentence into one output line.

use crate::app::Result;
use crate::domain::Format;

/// Encode `sentence` according to `format`.
///
/// `Text` yields the sentence and a newline. `Json` yields
/// `{"message": "<sentence>"}` followed by a blank line; consumers of the
/// JSON stream rely on that extra newline, so it is part of the output.
pub fn encode(sentence: &str, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Text => {
            let mut line = Vec::with_capacity(sentence.len() + 1);
            line.extend_from_slice(sentence.as_bytes());
            line.push(b'\n');
            Ok(line)
        }
        Format::Json => {
            let message = serde_json::to_string(sentence)?;
            Ok(format!("{{\"message\": {}}}\n\n", message).into_bytes())
        }
    }
}
