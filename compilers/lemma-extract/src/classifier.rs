use lemma_lexicon::Lexicon;
use lemma_protocol::{Pos, PosSet, TokenRef};

/// Closed classes dropped outright (adpositions only under the standalone exception).
const SKIPPED: PosSet = PosSet::from_bits_retain(
    PosSet::ADP.bits()
        | PosSet::AUX.bits()
        | PosSet::CCONJ.bits()
        | PosSet::SCONJ.bits()
        | PosSet::INTJ.bits()
        | PosSet::SYM.bits(),
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    NotAlphabetic,
    Determiner,
    Stopword,
    FunctionWord,
    /// Verb prefix folded into its governing verb.
    BoundParticle,
    Particle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Drop(DropReason),
}

/// Decides per token whether it is a content word worth reporting.
pub struct Classifier<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Classifier<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// Rules apply in order, first match wins.
    pub fn classify(&self, token: TokenRef<'_>) -> Verdict {
        if !token.is_alpha {
            return Verdict::Drop(DropReason::NotAlphabetic);
        }

        if self.lexicon.is_determiner(&token.cleaned()) || matches!(token.pos, Pos::Pron | Pos::Det) {
            return Verdict::Drop(DropReason::Determiner);
        }

        if token.is_stop
            && !PosSet::CONTENT.has(token.pos)
            && !self.lexicon.is_separable_tag(&token.tag)
            && !self.is_standalone_particle(token)
        {
            return Verdict::Drop(DropReason::Stopword);
        }

        if SKIPPED.has(token.pos) && !(token.pos == Pos::Adp && self.is_standalone_particle(token)) {
            return Verdict::Drop(DropReason::FunctionWord);
        }

        if token.pos == Pos::Part {
            if !self.lexicon.is_separable_tag(&token.tag) {
                return Verdict::Drop(DropReason::Particle);
            }
            let head = token.head();
            if head.pos.is_verbal() && head.sentence().id() == token.sentence().id() {
                return Verdict::Drop(DropReason::BoundParticle);
            }
        }

        Verdict::Keep
    }

    /// A separable prefix standing alone as its sentence, as in "Auf!".
    pub fn is_standalone_particle(&self, token: TokenRef<'_>) -> bool {
        self.lexicon.is_separable_particle(&token.text.to_lowercase())
            && token.is_root()
            && token.sentence().alpha_count() == 1
    }
}
