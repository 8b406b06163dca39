use lemma_lexicon::Lexicon;
use lemma_protocol::{Article, Gender, Number, TokenRef};

/// Infers der/die/das for nouns and proper nouns.
pub struct ArticleResolver<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> ArticleResolver<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// `None` for anything that is not a noun.
    pub fn resolve(&self, token: TokenRef<'_>) -> Option<Article> {
        if !token.pos.is_nominal() {
            return None;
        }

        let mut article = self.determiner_article(token);
        if article.is_none() && token.is_compound() && token.head().id() != token.id() {
            article = self.determiner_article(token.head());
        }

        // Plural determiners carry no gender, so an explicit plural
        // takes its article from Gender even over a found determiner.
        match (article, token.morph.gender(), token.morph.number()) {
            (Some(_), Some(gender), Some(Number::Plural)) => Some(gender.article()),
            (None, Some(gender), Some(Number::Singular)) => Some(gender.article()),
            (found, _, _) => found,
        }
    }

    /// Nearest left dependent found in the determiner table decides.
    fn determiner_article(&self, token: TokenRef<'_>) -> Option<Article> {
        let cleaned = token
            .lefts()
            .rev()
            .map(|left| left.cleaned())
            .find(|cleaned| self.lexicon.is_determiner(cleaned))?;

        if self.lexicon.is_gendered_indefinite(&cleaned) {
            return token.morph.gender().map(Gender::article);
        }
        self.lexicon.article(&cleaned)
    }
}
