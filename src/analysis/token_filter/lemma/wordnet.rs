//! Rule-based noun lemmatizer modelled on WordNet's morphology.
//!
//! WordNet reduces an inflected noun by first consulting an exception list of
//! irregular plurals and then detaching regular suffixes. Without the
//! WordNet database there is no lexicon to confirm a candidate, so the suffix
//! rules below are conservative and pick the detachment that is right for the
//! common case ("courses" -> "course", "classes" -> "class").
//!
//! Every lemma this produces is a fixed point: lemmatizing a lemma returns it
//! unchanged. The normalizer depends on that for idempotence.
//!
//! Where WordNet would leave an unknown word alone, these rules still detach
//! a trailing "s" ("aupps" -> "aupp"). Common words that merely end in "s"
//! are listed as identity entries in the exception table instead.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Lemmatizer;

/// Irregular noun forms and words that only look plural. Every value is
/// itself stable under the rules.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("afterwards", "afterwards"),
    ("alumni", "alumnus"),
    ("always", "always"),
    ("analyses", "analysis"),
    ("appendices", "appendix"),
    ("athletics", "athletics"),
    ("atlas", "atlas"),
    ("atlases", "atlas"),
    ("besides", "besides"),
    ("bias", "bias"),
    ("biases", "bias"),
    ("calories", "calorie"),
    ("canvas", "canvas"),
    ("canvases", "canvas"),
    ("children", "child"),
    ("cookies", "cookie"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("curricula", "curriculum"),
    ("data", "datum"),
    ("economics", "economics"),
    ("electronics", "electronics"),
    ("ethics", "ethics"),
    ("feet", "foot"),
    ("freshmen", "freshman"),
    ("geese", "goose"),
    ("halves", "half"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lens", "lens"),
    ("lenses", "lens"),
    ("linguistics", "linguistics"),
    ("lives", "life"),
    ("mathematics", "mathematics"),
    ("matrices", "matrix"),
    ("media", "medium"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("news", "news"),
    ("perhaps", "perhaps"),
    ("phenomena", "phenomenon"),
    ("physics", "physics"),
    ("politics", "politics"),
    ("quizzes", "quiz"),
    ("series", "series"),
    ("shelves", "shelf"),
    ("sometimes", "sometimes"),
    ("species", "species"),
    ("statistics", "statistics"),
    ("syllabi", "syllabus"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("towards", "towards"),
    ("whereas", "whereas"),
    ("wives", "wife"),
    ("women", "woman"),
];

static EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NOUN_EXCEPTIONS.iter().copied().collect());

/// Endings that look plural but are almost always singular nouns
/// ("class", "campus", "thesis").
const PROTECTED_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Sibilant plurals where WordNet strips "es" rather than "s".
const ES_ENDINGS: &[&str] = &["sses", "xes", "ches", "shes", "zzes"];

/// Words of this many characters or fewer are never reduced.
const MIN_REDUCIBLE_LEN: usize = 3;

/// Noun lemmatizer using an exception table plus suffix detachment.
#[derive(Debug, Clone, Default)]
pub struct WordNetLemmatizer;

impl WordNetLemmatizer {
    /// Create a new lemmatizer.
    pub fn new() -> Self {
        WordNetLemmatizer
    }

    fn detach_suffix(word: &str) -> &str {
        if word.len() <= MIN_REDUCIBLE_LEN
            || PROTECTED_ENDINGS.iter().any(|end| word.ends_with(end))
        {
            return word;
        }

        if ES_ENDINGS.iter().any(|end| word.ends_with(end)) {
            return &word[..word.len() - 2];
        }

        word.strip_suffix('s').unwrap_or(word)
    }
}

impl Lemmatizer for WordNetLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = EXCEPTIONS.get(word) {
            return (*lemma).to_string();
        }

        // "ies" -> "y" needs a longer stem than the bare "s" rule, "ties" keeps "tie".
        if word.len() > 4
            && let Some(stem) = word.strip_suffix("ies")
        {
            return format!("{stem}y");
        }

        let candidate = Self::detach_suffix(word);
        EXCEPTIONS
            .get(candidate)
            .copied()
            .unwrap_or(candidate)
            .to_string()
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}
