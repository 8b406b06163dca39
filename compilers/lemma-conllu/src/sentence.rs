use lemma_protocol::{Pos, TokenDraft};

use crate::morphology::{parse_feats, Misc};
use crate::parser::{Head, Row, TokenIndex};
use crate::stop_words::is_stop_word;
use crate::ConlluError;

/// One annotated sentence as read from CoNLL-U.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedSentence {
    pub text: String,
    pub tokens: Vec<TokenDraft>,
}

/// Collects rows until the blank line that closes a sentence.
#[derive(Debug, Default)]
pub(crate) struct SentenceAccumulator {
    text: Option<String>,
    tokens: Vec<TokenDraft>,
    space_after: Vec<bool>,
    lines: Vec<usize>,
}

impl SentenceAccumulator {
    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    pub(crate) fn push(&mut self, row: Row<'_>, line: usize) -> Result<(), ConlluError> {
        let position = match row.index {
            TokenIndex::Word(position) => position,
            // Surface contractions and enhanced-graph nodes carry no basic-tree token
            TokenIndex::Range | TokenIndex::Empty => return Ok(()),
        };

        let expected = self.tokens.len() + 1;
        if position != expected {
            return Err(ConlluError::Sequence {
                line,
                expected,
                found: position,
            });
        }

        let morph = parse_feats(row.feats).ok_or_else(|| ConlluError::Feats {
            line,
            feats: row.feats.to_string(),
        })?;
        let misc = Misc::parse(row.misc);
        let lemma = if row.lemma == "_" { row.form } else { row.lemma };

        let mut draft = TokenDraft::new(row.form, lemma, Pos::from_upos(row.upos))
            .tag(row.xpos)
            .dep(row.deprel)
            .stop(misc.stop.unwrap_or_else(|| is_stop_word(row.form)))
            .morph(morph);
        if let Head::Word(head) = row.head {
            draft = draft.head(head - 1);
        }

        self.tokens.push(draft);
        self.space_after.push(misc.space_after);
        self.lines.push(line);
        Ok(())
    }

    /// Closes the current sentence, `None` if no token rows were seen.
    pub(crate) fn finish(&mut self) -> Result<Option<AnnotatedSentence>, ConlluError> {
        let acc = std::mem::take(self);
        if acc.tokens.is_empty() {
            return Ok(None);
        }

        let len = acc.tokens.len();
        for (draft, &line) in acc.tokens.iter().zip(&acc.lines) {
            if let Some(head) = draft.head {
                if head >= len {
                    return Err(ConlluError::Head {
                        line,
                        head: (head + 1).to_string(),
                    });
                }
            }
        }

        let text = match acc.text {
            Some(text) => text,
            None => rebuild_text(&acc.tokens, &acc.space_after),
        };
        Ok(Some(AnnotatedSentence {
            text,
            tokens: acc.tokens,
        }))
    }
}

fn rebuild_text(tokens: &[TokenDraft], space_after: &[bool]) -> String {
    let mut text = String::new();
    for (i, (token, &space)) in tokens.iter().zip(space_after).enumerate() {
        text.push_str(&token.text);
        if space && i + 1 < tokens.len() {
            text.push(' ');
        }
    }
    text
}
