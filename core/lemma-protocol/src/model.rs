use core::ops::Deref;

use thiserror::Error;

use crate::ids::{SentenceId, TokenId};
use crate::morphology::{Article, Morph, Pos};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("sentence {sentence}: token {token} points at head {head}, but the sentence has {len} tokens")]
    HeadOutOfRange {
        sentence: usize,
        token: usize,
        head: usize,
        len: usize,
    },

    #[error("segmented sentences and unsegmented tokens cannot be mixed in one document")]
    MixedSegmentation,
}

/// One token as delivered by the annotation engine. Read-only to the core.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedToken {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    /// Fine-grained tag (STTS for German models).
    pub tag: String,
    pub dep: String,
    pub is_stop: bool,
    pub is_alpha: bool,
    pub morph: Morph,
    /// Syntactic governor; equals the token's own id for a sentence root.
    pub head: TokenId,
}

impl AnnotatedToken {
    /// Lowercased surface text stripped of surrounding spaces, commas and periods.
    pub fn cleaned(&self) -> String {
        self.text
            .to_lowercase()
            .trim_matches(|c| matches!(c, ' ' | ',' | '.'))
            .to_string()
    }

    pub fn is_root(&self) -> bool {
        self.dep.eq_ignore_ascii_case("root")
    }

    pub fn is_compound(&self) -> bool {
        self.dep == "compound"
    }
}

/// Engine-side description of a token before it is placed in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDraft {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub tag: String,
    pub dep: String,
    pub is_stop: bool,
    pub is_alpha: bool,
    pub morph: Morph,
    /// Sentence-local index of the head, `None` for a root.
    pub head: Option<usize>,
}

impl TokenDraft {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: Pos) -> Self {
        let text = text.into();
        let is_alpha = is_alphabetic(&text);
        Self {
            text,
            lemma: lemma.into(),
            pos,
            tag: String::new(),
            dep: String::new(),
            is_stop: false,
            is_alpha,
            morph: Morph::new(),
            head: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn dep(mut self, dep: impl Into<String>) -> Self {
        self.dep = dep.into();
        self
    }

    pub fn head(mut self, head: usize) -> Self {
        self.head = Some(head);
        self
    }

    pub fn stop(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    pub fn feat(mut self, name: &str, value: &str) -> Self {
        self.morph.insert(name, [value]);
        self
    }

    pub fn morph(mut self, morph: Morph) -> Self {
        self.morph = morph;
        self
    }
}

/// Non-empty and made only of alphabetic characters.
pub fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SentenceSpan {
    text: String,
    start: usize,
    end: usize,
    alpha: usize,
}

/// An annotated document: tokens in order, grouped into sentences.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    tokens: Vec<AnnotatedToken>,
    children: Vec<Vec<TokenId>>,
    sentence_of: Vec<SentenceId>,
    sentences: Vec<SentenceSpan>,
}

impl Document {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, id: TokenId) -> TokenRef<'_> {
        TokenRef { doc: self, id }
    }

    pub fn tokens(&self) -> impl Iterator<Item = TokenRef<'_>> {
        (0..self.tokens.len()).map(move |i| self.token(TokenId(i as u32)))
    }

    /// Sentences in order. Tokens without segmentation form one pseudo-sentence.
    pub fn sentences(&self) -> impl Iterator<Item = SentenceRef<'_>> {
        (0..self.sentences.len()).map(move |i| SentenceRef {
            doc: self,
            id: SentenceId(i as u32),
        })
    }

    fn span(&self, id: SentenceId) -> &SentenceSpan {
        &self.sentences[id.index()]
    }
}

/// Borrowed view of one token with navigation into its document.
#[derive(Debug, Clone, Copy)]
pub struct TokenRef<'d> {
    doc: &'d Document,
    id: TokenId,
}

impl<'d> TokenRef<'d> {
    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn data(&self) -> &'d AnnotatedToken {
        &self.doc.tokens[self.id.index()]
    }

    pub fn head(&self) -> TokenRef<'d> {
        self.doc.token(self.data().head)
    }

    /// Direct dependents in sentence order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = TokenRef<'d>> + 'd {
        let doc = self.doc;
        doc.children[self.id.index()].iter().map(move |&c| doc.token(c))
    }

    /// Dependents that precede the token, left to right.
    pub fn lefts(&self) -> impl DoubleEndedIterator<Item = TokenRef<'d>> + 'd {
        let id = self.id;
        self.children().filter(move |c| c.id < id)
    }

    pub fn sentence(&self) -> SentenceRef<'d> {
        SentenceRef {
            doc: self.doc,
            id: self.doc.sentence_of[self.id.index()],
        }
    }
}

impl Deref for TokenRef<'_> {
    type Target = AnnotatedToken;

    fn deref(&self) -> &AnnotatedToken {
        self.data()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SentenceRef<'d> {
    doc: &'d Document,
    id: SentenceId,
}

impl<'d> SentenceRef<'d> {
    pub fn id(&self) -> SentenceId {
        self.id
    }

    pub fn text(&self) -> &'d str {
        &self.doc.span(self.id).text
    }

    pub fn tokens(&self) -> impl Iterator<Item = TokenRef<'d>> + 'd {
        let span = self.doc.span(self.id);
        let doc = self.doc;
        (span.start..span.end).map(move |i| doc.token(TokenId(i as u32)))
    }

    /// Alphabetic tokens in the sentence, counted once at build time.
    pub fn alpha_count(&self) -> usize {
        self.doc.span(self.id).alpha
    }
}

/// Assembles a [`Document`] sentence by sentence.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    text: String,
    tokens: Vec<AnnotatedToken>,
    sentences: Vec<SentenceSpan>,
    unsegmented: bool,
}

impl DocumentBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Appends a sentence. Draft heads are indices into `drafts`.
    pub fn sentence(
        &mut self,
        text: impl Into<String>,
        drafts: Vec<TokenDraft>,
    ) -> Result<&mut Self, ModelError> {
        if self.unsegmented {
            return Err(ModelError::MixedSegmentation);
        }
        let (start, end) = self.push_tokens(drafts)?;
        self.sentences.push(SentenceSpan {
            text: text.into(),
            start,
            end,
            alpha: alpha_count(&self.tokens[start..end]),
        });
        Ok(self)
    }

    /// Appends tokens without sentence boundaries. A document built only
    /// this way exposes a single pseudo-sentence over the whole text.
    pub fn unsegmented(&mut self, drafts: Vec<TokenDraft>) -> Result<&mut Self, ModelError> {
        if !self.sentences.is_empty() {
            return Err(ModelError::MixedSegmentation);
        }
        self.unsegmented = true;
        self.push_tokens(drafts)?;
        Ok(self)
    }

    fn push_tokens(&mut self, drafts: Vec<TokenDraft>) -> Result<(usize, usize), ModelError> {
        let start = self.tokens.len();
        let len = drafts.len();
        for (i, draft) in drafts.into_iter().enumerate() {
            let local_head = draft.head.unwrap_or(i);
            if local_head >= len {
                self.tokens.truncate(start);
                return Err(ModelError::HeadOutOfRange {
                    sentence: self.sentences.len(),
                    token: i,
                    head: local_head,
                    len,
                });
            }
            self.tokens.push(AnnotatedToken {
                text: draft.text,
                lemma: draft.lemma,
                pos: draft.pos,
                tag: draft.tag,
                dep: draft.dep,
                is_stop: draft.is_stop,
                is_alpha: draft.is_alpha,
                morph: draft.morph,
                head: TokenId((start + local_head) as u32),
            });
        }
        Ok((start, start + len))
    }

    pub fn build(self) -> Document {
        let len = self.tokens.len();
        let mut sentences = self.sentences;
        if sentences.is_empty() && len > 0 {
            sentences.push(SentenceSpan {
                text: self.text.clone(),
                start: 0,
                end: len,
                alpha: alpha_count(&self.tokens),
            });
        }

        let mut sentence_of = vec![SentenceId(0); len];
        for (i, span) in sentences.iter().enumerate() {
            sentence_of[span.start..span.end].fill(SentenceId(i as u32));
        }

        let mut children = vec![Vec::new(); len];
        for (i, token) in self.tokens.iter().enumerate() {
            let head = token.head.index();
            if head != i {
                children[head].push(TokenId(i as u32));
            }
        }

        Document {
            text: self.text,
            tokens: self.tokens,
            children,
            sentence_of,
            sentences,
        }
    }
}

fn alpha_count(tokens: &[AnnotatedToken]) -> usize {
    tokens.iter().filter(|t| t.is_alpha).count()
}

/// One reported content word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LemmaRecord {
    pub lemma: String,
    pub article: Option<Article>,
    pub sentence: String,
}

/// Dictionary-style input entry for batch normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchEntry {
    #[cfg_attr(feature = "serde", serde(default))]
    pub word: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizedEntry {
    pub word: String,
    pub translation: String,
    pub article: Option<Article>,
}
