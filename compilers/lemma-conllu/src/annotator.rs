use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use lemma_protocol::{AnnotateError, Annotator, Document, DocumentBuilder};
use tracing::debug;

use crate::sentence::AnnotatedSentence;
use crate::{parse_str, ConlluError};

struct IndexedSentence {
    key: String,
    sentence: AnnotatedSentence,
}

/// Annotation engine backed by CoNLL-U output of a German model.
///
/// Raw text is covered left to right by the longest annotated sentence
/// whose (whitespace-normalized) text matches at the current position.
pub struct ConlluAnnotator {
    sentences: Vec<IndexedSentence>,
    by_first_word: HashMap<String, Vec<usize>>,
}

impl ConlluAnnotator {
    pub fn new(sentences: Vec<AnnotatedSentence>) -> Self {
        let mut indexed = Vec::with_capacity(sentences.len());
        let mut by_first_word: HashMap<String, Vec<usize>> = HashMap::new();

        for sentence in sentences {
            let key = normalize_whitespace(&sentence.text);
            let Some(first) = key.split(' ').next().filter(|w| !w.is_empty()) else {
                continue;
            };
            by_first_word
                .entry(first.to_string())
                .or_default()
                .push(indexed.len());
            indexed.push(IndexedSentence { key, sentence });
        }

        Self {
            sentences: indexed,
            by_first_word,
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConlluError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConlluError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let annotator: Self = source.parse()?;
        debug!(path = %path.display(), sentences = annotator.len(), "loaded CoNLL-U annotations");
        Ok(annotator)
    }

    /// Number of annotated sentences available.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    fn longest_match(&self, rest: &str) -> Option<&IndexedSentence> {
        let first = rest.split(' ').next()?;
        let candidates = self.by_first_word.get(first)?;

        let mut best: Option<&IndexedSentence> = None;
        for candidate in candidates.iter().map(|&i| &self.sentences[i]) {
            let Some(after) = rest.strip_prefix(candidate.key.as_str()) else {
                continue;
            };
            if !(after.is_empty() || after.starts_with(' ')) {
                continue;
            }
            if best.map_or(true, |b| candidate.key.len() > b.key.len()) {
                best = Some(candidate);
            }
        }
        best
    }
}

impl FromStr for ConlluAnnotator {
    type Err = ConlluError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(parse_str(source)?))
    }
}

impl Annotator for ConlluAnnotator {
    fn name(&self) -> &str {
        "conllu"
    }

    fn annotate(&self, text: &str) -> Result<Document, AnnotateError> {
        let normalized = normalize_whitespace(text);
        let mut builder = DocumentBuilder::new(text.trim());
        let mut rest = normalized.as_str();

        while !rest.is_empty() {
            let matched = self
                .longest_match(rest)
                .ok_or_else(|| AnnotateError::Unannotated(snippet(rest)))?;
            builder.sentence(
                matched.sentence.text.clone(),
                matched.sentence.tokens.clone(),
            )?;
            rest = rest[matched.key.len()..].trim_start();
        }

        Ok(builder.build())
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn snippet(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    match text.char_indices().nth(MAX_CHARS) {
        Some((end, _)) => format!("{}…", &text[..end]),
        None => text.to_string(),
    }
}
