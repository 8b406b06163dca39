use std::sync::Arc;

use lemma_lexicon::Lexicon;
use lemma_protocol::{Annotator, Document, LemmaRecord};
use tracing::{debug, info};

use crate::article::ArticleResolver;
use crate::classifier::{Classifier, Verdict};
use crate::emit::Emitter;
use crate::error::ExtractError;
use crate::separable::Reconstructor;

/// Live-text pipeline: annotated document in, deduplicated lemma records out.
///
/// Holds only the immutable lexicon; every call starts from an empty
/// [`Emitter`], so one extractor can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct LemmaExtractor {
    lexicon: Arc<Lexicon>,
}

impl LemmaExtractor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn german() -> Self {
        Self::new(Arc::new(Lexicon::german()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Walks sentences and tokens in document order.
    pub fn extract(&self, doc: &Document) -> Vec<LemmaRecord> {
        let classifier = Classifier::new(&self.lexicon);
        let reconstructor = Reconstructor::new(&self.lexicon);
        let resolver = ArticleResolver::new(&self.lexicon);
        let mut emitter = Emitter::new();

        for sentence in doc.sentences() {
            for token in sentence.tokens() {
                if let Verdict::Drop(reason) = classifier.classify(token) {
                    debug!(token = %token.text, ?reason, "dropped token");
                    continue;
                }

                let lemma = match reconstructor.fuse(token) {
                    Some(fusion) => {
                        emitter.consume_particle(&fusion.particle.text);
                        fusion.lemma
                    }
                    None => token.lemma.clone(),
                };

                if !emitter.emit(lemma, sentence.text(), || resolver.resolve(token)) {
                    debug!(token = %token.text, "duplicate lemma");
                }
            }
        }

        let records = emitter.finish();
        info!(tokens = doc.len(), records = records.len(), "extracted lemmas");
        records
    }

    /// Annotates `text` and extracts its lemmas. Blank input never reaches
    /// the engine.
    pub fn lemmatize<A>(&self, annotator: &A, text: &str) -> Result<Vec<LemmaRecord>, ExtractError>
    where
        A: Annotator + ?Sized,
    {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let doc = annotator.annotate(text)?;
        Ok(self.extract(&doc))
    }
}

impl Default for LemmaExtractor {
    fn default() -> Self {
        Self::german()
    }
}
