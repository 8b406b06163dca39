use lemma_lexicon::Lexicon;
use lemma_protocol::TokenRef;

/// A verb whose detached prefix was folded back in.
#[derive(Debug, Clone)]
pub struct Fusion<'d> {
    /// Lowercase prefix followed by the verb lemma, e.g. "aufstehen".
    pub lemma: String,
    pub particle: TokenRef<'d>,
}

/// Rejoins German separable-prefix verbs split across a clause.
pub struct Reconstructor<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Reconstructor<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// Fuses a verb with its first prefix-tagged dependent, if any.
    /// Children are looked up regardless of position, so the prefix may
    /// appear before or after the verb.
    pub fn fuse<'d>(&self, token: TokenRef<'d>) -> Option<Fusion<'d>> {
        if !token.pos.is_verbal() {
            return None;
        }
        let particle = token
            .children()
            .find(|child| self.lexicon.is_separable_tag(&child.tag))?;

        Some(Fusion {
            lemma: format!("{}{}", particle.text.to_lowercase(), token.lemma),
            particle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemma_protocol::{Document, DocumentBuilder, Pos, TokenDraft, TokenId};

    fn doc(drafts: Vec<TokenDraft>) -> Document {
        let mut builder = DocumentBuilder::new("");
        builder.sentence("", drafts).unwrap();
        builder.build()
    }

    #[test]
    fn test_fuses_distant_prefix() {
        // "Ich stehe jeden Tag auf"
        let doc = doc(vec![
            TokenDraft::new("Ich", "ich", Pos::Pron).head(1),
            TokenDraft::new("stehe", "stehen", Pos::Verb).dep("ROOT"),
            TokenDraft::new("jeden", "jeder", Pos::Det).head(3),
            TokenDraft::new("Tag", "Tag", Pos::Noun).head(1),
            TokenDraft::new("Auf", "auf", Pos::Adp).tag("PTKVZ").head(1),
        ]);
        let lexicon = Lexicon::german();
        let reconstructor = Reconstructor::new(&lexicon);

        let fusion = reconstructor.fuse(doc.token(TokenId(1))).unwrap();
        assert_eq!(fusion.lemma, "aufstehen");
        assert_eq!(fusion.particle.id(), TokenId(4));
    }

    #[test]
    fn test_only_first_prefix_is_used() {
        let doc = doc(vec![
            TokenDraft::new("an", "an", Pos::Part).tag("PTKVZ").head(1),
            TokenDraft::new("kommt", "kommen", Pos::Aux).dep("ROOT"),
            TokenDraft::new("mit", "mit", Pos::Part).tag("PTKVZ").head(1),
        ]);
        let lexicon = Lexicon::german();
        let fusion = Reconstructor::new(&lexicon).fuse(doc.token(TokenId(1))).unwrap();
        assert_eq!(fusion.lemma, "ankommen");
    }

    #[test]
    fn test_no_prefix_or_not_a_verb() {
        let doc = doc(vec![
            TokenDraft::new("Er", "er", Pos::Pron).head(1),
            TokenDraft::new("steht", "stehen", Pos::Verb).dep("ROOT"),
            TokenDraft::new("Haus", "Haus", Pos::Noun).head(1),
            TokenDraft::new("auf", "auf", Pos::Part).tag("PTKVZ").head(2),
        ]);
        let lexicon = Lexicon::german();
        let reconstructor = Reconstructor::new(&lexicon);

        assert!(reconstructor.fuse(doc.token(TokenId(1))).is_none());
        // Prefix-tagged child under a noun is not fused
        assert!(reconstructor.fuse(doc.token(TokenId(2))).is_none());
    }
}
