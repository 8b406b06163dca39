pub mod annotator;
pub mod ids;
pub mod morphology;

// Re-export core types for convenience
pub use annotator::{AnnotateError, Annotator};
pub use ids::{SentenceId, TokenId};
pub use morphology::*;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(text: &str, head: usize) -> TokenDraft {
        TokenDraft::new(text, text, Pos::Noun).head(head).dep("nk")
    }

    #[test]
    fn test_navigation_views() {
        // "Der große Hund bellt ."
        let mut builder = DocumentBuilder::new("Der große Hund bellt.");
        builder
            .sentence(
                "Der große Hund bellt.",
                vec![
                    TokenDraft::new("Der", "der", Pos::Det).head(2).dep("nk"),
                    TokenDraft::new("große", "groß", Pos::Adj).head(2).dep("nk"),
                    TokenDraft::new("Hund", "Hund", Pos::Noun).head(3).dep("sb"),
                    TokenDraft::new("bellt", "bellen", Pos::Verb).dep("ROOT"),
                    TokenDraft::new(".", "--", Pos::Punct).head(3).dep("punct"),
                ],
            )
            .unwrap();
        let doc = builder.build();

        let hund = doc.token(TokenId(2));
        assert_eq!(hund.head().lemma, "bellen");

        let lefts: Vec<_> = hund.lefts().map(|t| t.text.clone()).collect();
        assert_eq!(lefts, ["Der", "große"]);

        // Nearest-first walk
        assert_eq!(hund.lefts().rev().next().unwrap().text, "große");

        let root = doc.token(TokenId(3));
        assert!(root.is_root());
        assert_eq!(root.head().id(), root.id());
        assert_eq!(root.children().count(), 2);
        assert_eq!(root.sentence().alpha_count(), 4);
    }

    #[test]
    fn test_sentence_boundaries() {
        let mut builder = DocumentBuilder::new("Hund. Katze.");
        builder
            .sentence("Hund.", vec![noun("Hund", 0), noun(".", 0)])
            .unwrap()
            .sentence("Katze.", vec![noun("Katze", 0), noun(".", 0)])
            .unwrap();
        let doc = builder.build();

        let texts: Vec<_> = doc.sentences().map(|s| s.text()).collect();
        assert_eq!(texts, ["Hund.", "Katze."]);

        let katze = doc.token(TokenId(2));
        assert_eq!(katze.sentence().text(), "Katze.");
        // Heads are sentence-local in drafts
        assert_eq!(doc.token(TokenId(3)).head().id(), TokenId(2));
    }

    #[test]
    fn test_unsegmented_document_is_one_pseudo_sentence() {
        let mut builder = DocumentBuilder::new("Hund Katze");
        builder
            .unsegmented(vec![noun("Hund", 0), noun("Katze", 0)])
            .unwrap();
        let doc = builder.build();

        let sentences: Vec<_> = doc.sentences().collect();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text(), "Hund Katze");
        assert_eq!(sentences[0].tokens().count(), 2);
    }

    #[test]
    fn test_segmented_and_unsegmented_do_not_mix() {
        let mut builder = DocumentBuilder::new("Hund. Katze");
        builder.sentence("Hund.", vec![noun("Hund", 0)]).unwrap();
        let err = builder.unsegmented(vec![noun("Katze", 0)]).unwrap_err();
        assert_eq!(err, ModelError::MixedSegmentation);

        let mut builder = DocumentBuilder::new("Hund Katze");
        builder.unsegmented(vec![noun("Hund", 0)]).unwrap();
        let err = builder.sentence("Katze", vec![noun("Katze", 0)]).unwrap_err();
        assert_eq!(err, ModelError::MixedSegmentation);
    }

    #[test]
    fn test_every_token_knows_its_sentence() {
        let mut builder = DocumentBuilder::new("");
        for i in 0..50 {
            builder
                .sentence(format!("s{i}"), vec![noun("Hund", 0), noun("1", 0), noun("Katze", 0)])
                .unwrap();
        }
        let doc = builder.build();

        for token in doc.tokens() {
            let expected = token.id().index() / 3;
            let sentence = token.sentence();
            assert_eq!(sentence.id(), SentenceId(expected as u32));
            assert_eq!(sentence.text(), format!("s{expected}"));
            assert_eq!(sentence.alpha_count(), 2);
        }
    }

    #[test]
    fn test_empty_document_has_no_sentences() {
        let doc = DocumentBuilder::new("").build();
        assert!(doc.is_empty());
        assert_eq!(doc.sentences().count(), 0);
    }

    #[test]
    fn test_head_out_of_range() {
        let mut builder = DocumentBuilder::new("Hund");
        let err = builder
            .sentence("Hund", vec![noun("Hund", 3)])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::HeadOutOfRange {
                sentence: 0,
                token: 0,
                head: 3,
                len: 1
            }
        );
    }

    #[test]
    fn test_cleaned_text() {
        let token = AnnotatedToken {
            text: "Meinen,".to_string(),
            lemma: "mein".to_string(),
            pos: Pos::Det,
            tag: "PPOSAT".to_string(),
            dep: "nk".to_string(),
            is_stop: true,
            is_alpha: false,
            morph: Morph::new(),
            head: TokenId(0),
        };
        assert_eq!(token.cleaned(), "meinen");
    }

    #[test]
    fn test_morph_first_value_wins() {
        let mut morph = Morph::new();
        morph.insert("Gender", ["Fem", "Masc"]);
        morph.insert("Number", ["Plur"]);

        assert_eq!(morph.gender(), Some(Gender::Feminine));
        assert_eq!(morph.number(), Some(Number::Plural));
        assert!(morph.get("Case").is_empty());
        assert_eq!(morph.to_string(), "Gender=Fem,Masc|Number=Plur");
    }

    #[test]
    fn test_pos_sets() {
        assert!(PosSet::CONTENT.has(Pos::Propn));
        assert!(!PosSet::CONTENT.has(Pos::Adv));
        assert!(PosSet::FUNCTION.has(Pos::Part));
        assert!(!PosSet::FUNCTION.has(Pos::Num));
        assert_eq!(Pos::from_upos("propn"), Pos::Propn);
        assert_eq!(Pos::from_upos("???"), Pos::X);
    }

    #[test]
    fn test_gender_article_mapping() {
        assert_eq!(Gender::Masculine.article(), Article::Der);
        assert_eq!(Gender::Feminine.article(), Article::Die);
        assert_eq!(Gender::Neuter.article(), Article::Das);
        assert_eq!(Article::parse("DAS"), Some(Article::Das));
    }
}
