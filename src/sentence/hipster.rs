use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::sentence::SentenceSource;

pub const DEFAULT_WORDS: usize = 5;

const WORDS: &[&str] = &[
    "wes", "anderson", "chicharrones", "narwhal", "food", "truck", "marfa", "aesthetic",
    "keytar", "art", "party", "sustainable", "forage", "mlkshk", "gentrify", "locavore",
    "swag", "hoodie", "microdosing", "vhs", "before", "they", "sold", "out", "pabst",
    "plaid", "fixie", "chambray", "banjo", "beard", "brooklyn", "tousled", "kombucha",
    "kale", "chips", "cold-pressed", "craft", "beer", "hashtag", "selvage", "pour-over",
    "sriracha", "freegan", "gluten-free", "mixtape", "normcore", "cornhole", "quinoa",
    "semiotics", "synth", "tattooed", "twee", "umami", "vinyl", "whatever", "yolo",
    "bespoke", "biodiesel", "bitters", "letterpress", "meditation", "pickled", "polaroid",
    "ramps", "retro", "roof", "seitan", "shoreditch", "skateboard", "street", "taxidermy",
    "thundercats", "tofu", "typewriter", "wayfarers", "williamsburg", "xoxo", "austin",
    "authentic", "brunch", "butcher", "cardigan", "cliche", "distillery", "echo", "park",
    "fanny", "pack", "flannel", "heirloom", "irony", "kitsch", "lomo", "mustache",
    "organic", "portland", "readymade", "slow-carb", "squid", "stumptown", "ugh", "viral",
];

/// Hipster-ipsum sentence generator.
///
/// Each sentence is `words` random vocabulary entries, the first one
/// capitalised, joined by spaces and closed with a full stop.
pub struct HipsterSentence {
    rng: SmallRng,
    words: usize,
}

impl HipsterSentence {
    pub fn new(words: usize) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            words,
        }
    }

    /// Deterministic generator, handy for reproducible load.
    pub fn with_seed(words: usize, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            words,
        }
    }

    fn sentence(&mut self) -> String {
        let mut sentence = String::new();

        for i in 0..self.words {
            let word = WORDS.choose(&mut self.rng).copied().unwrap_or("ugh");
            if i == 0 {
                sentence.push_str(&capitalize(word));
            } else {
                sentence.push(' ');
                sentence.push_str(word);
            }
        }

        sentence.push('.');
        sentence
    }
}

impl Default for HipsterSentence {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

impl SentenceSource for HipsterSentence {
    fn next_sentence(&mut self) -> String {
        self.sentence()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
