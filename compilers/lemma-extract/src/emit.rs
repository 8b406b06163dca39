use std::collections::HashSet;

use lemma_protocol::{Article, LemmaRecord};

/// Case-insensitive record of lemmas (and consumed prefixes) already seen.
#[derive(Debug, Default, Clone)]
pub struct SeenSet {
    words: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Returns `false` if the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }
}

/// Collects at most one record per distinct lemma of a document.
#[derive(Debug, Default)]
pub struct Emitter {
    seen: SeenSet,
    records: Vec<LemmaRecord>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a prefix folded into a verb so it never surfaces on its own.
    pub fn consume_particle(&mut self, text: &str) {
        self.seen.insert(text);
    }

    /// Appends a record unless the lemma was seen before. The article is
    /// only computed for lemmas that are actually emitted.
    pub fn emit<F>(&mut self, lemma: String, sentence: &str, article: F) -> bool
    where
        F: FnOnce() -> Option<Article>,
    {
        if !self.seen.insert(&lemma) {
            return false;
        }
        self.records.push(LemmaRecord {
            lemma,
            article: article(),
            sentence: sentence.to_string(),
        });
        true
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn finish(self) -> Vec<LemmaRecord> {
        self.records
    }
}
