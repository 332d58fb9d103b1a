pub mod hipster;

pub use hipster::HipsterSentence;

/// Produces human-readable filler sentences on demand.
pub trait SentenceSource: Send {
    fn next_sentence(&mut self) -> String;
}

impl<F> SentenceSource for F
where
    F: FnMut() -> String + Send,
{
    fn next_sentence(&mut self) -> String {
        self()
    }
}
