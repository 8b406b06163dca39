use std::sync::LazyLock;

use lemma_lexicon::Lexicon;
use lemma_protocol::{Annotator, Article, BatchEntry, NormalizedEntry, Pos, PosSet};
use regex::Regex;
use tracing::{debug, info};

use crate::error::ExtractError;

/// Trailing ", die" style article marker.
static TRAILING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),\s*(die|der|das)$").expect("article marker pattern should compile")
});

/// Everything stripped before annotation: "(sich) ", other parentheticals
/// and the trailing article marker.
static DECORATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(sich\)\s*|\(.*\)|,\s*(die|der|das)$")
        .expect("headword decoration pattern should compile")
});

/// Splits a dictionary headword into its cleaned form and explicit article.
///
/// `"Möglichkeit, die"` gives `("Möglichkeit", Some(Die))` and
/// `"(sich) vorstellen"` gives `("vorstellen", None)`.
pub fn split_article(word: &str) -> (String, Option<Article>) {
    let article = TRAILING_ARTICLE
        .captures(word)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Article::parse(m.as_str()));
    let cleaned = DECORATIONS.replace_all(word, "").trim().to_string();
    (cleaned, article)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Punctuation,
    Digit,
    Excluded,
    TooShort,
    FunctionWord,
    Stopword,
    Auxiliary,
}

/// Result of a batch run: kept entries and rejected lemmas, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub entries: Vec<NormalizedEntry>,
    pub removed: Vec<String>,
}

/// Dictionary-entry normalizer. No dedup and no verb reconstruction:
/// every entry is a single headword.
pub struct BatchNormalizer<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> BatchNormalizer<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn normalize<A>(&self, annotator: &A, entries: &[BatchEntry]) -> Result<BatchOutcome, ExtractError>
    where
        A: Annotator + ?Sized,
    {
        let mut outcome = BatchOutcome::default();

        for (index, entry) in entries.iter().enumerate() {
            let word = entry.word.trim();
            if word.is_empty() {
                continue;
            }

            let (cleaned, article) = split_article(word);
            if cleaned.is_empty() {
                debug!(word, "entry is empty after cleaning");
                continue;
            }

            let doc = annotator.annotate(&cleaned).map_err(|source| ExtractError::Entry {
                index,
                word: word.to_string(),
                source,
            })?;
            let Some(token) = doc.tokens().next().filter(|t| !t.text.trim().is_empty()) else {
                continue;
            };

            let lemma = token.lemma.to_lowercase();
            if let Some(reason) = self.rejection(&token.text, token.pos, token.is_stop, &lemma) {
                debug!(word, lemma = %lemma, ?reason, "rejected entry");
                outcome.removed.push(lemma);
                continue;
            }

            outcome.entries.push(NormalizedEntry {
                word: token.lemma.clone(),
                translation: entry.translation.clone(),
                article,
            });
        }

        info!(
            input = entries.len(),
            kept = outcome.entries.len(),
            removed = outcome.removed.len(),
            "normalized batch"
        );
        Ok(outcome)
    }

    /// Checks run in a fixed order; `lemma` is already lowercase.
    fn rejection(&self, text: &str, pos: Pos, is_stop: bool, lemma: &str) -> Option<Rejection> {
        if pos == Pos::Punct || text.chars().all(|c| c.is_ascii_punctuation()) {
            return Some(Rejection::Punctuation);
        }
        if text.chars().all(|c| c.is_ascii_digit()) {
            return Some(Rejection::Digit);
        }
        if self.lexicon.is_excluded(lemma) {
            return Some(Rejection::Excluded);
        }
        if lemma.chars().count() <= 2 {
            return Some(Rejection::TooShort);
        }
        if PosSet::FUNCTION.has(pos) {
            return Some(Rejection::FunctionWord);
        }
        if is_stop && !PosSet::CONTENT.has(pos) {
            return Some(Rejection::Stopword);
        }
        if self.lexicon.is_auxiliary(lemma) {
            return Some(Rejection::Auxiliary);
        }
        None
    }
}
