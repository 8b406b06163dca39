pub mod annotator;
pub mod morphology;
pub mod parser;
pub mod sentence;
pub mod stop_words;

use thiserror::Error;

use crate::parser::{parse_line, Line, RowError};
use crate::sentence::SentenceAccumulator;

pub use annotator::ConlluAnnotator;
pub use sentence::AnnotatedSentence;

#[derive(Debug, Error)]
pub enum ConlluError {
    #[error("line {line}: expected 10 columns, found {found}")]
    Columns { line: usize, found: usize },

    #[error("line {line}: invalid token id {id:?}")]
    Id { line: usize, id: String },

    #[error("line {line}: invalid head {head:?}")]
    Head { line: usize, head: String },

    #[error("line {line}: token id {found} out of sequence, expected {expected}")]
    Sequence {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: malformed FEATS {feats:?}")]
    Feats { line: usize, feats: String },

    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RowError {
    fn at(self, line: usize) -> ConlluError {
        match self {
            RowError::Columns(found) => ConlluError::Columns { line, found },
            RowError::Id(id) => ConlluError::Id { line, id },
            RowError::Head(head) => ConlluError::Head { line, head },
        }
    }
}

/// Primary entry point: CoNLL-U text -> annotated sentences.
pub fn parse_str(source: &str) -> Result<Vec<AnnotatedSentence>, ConlluError> {
    let mut sentences = Vec::new();
    let mut current = SentenceAccumulator::default();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        match parse_line(raw).map_err(|e| e.at(line))? {
            Line::Blank => sentences.extend(current.finish()?),
            Line::Comment { key: "text", value } => current.set_text(value.unwrap_or_default()),
            Line::Comment { .. } => {}
            Line::Row(row) => current.push(row, line)?,
        }
    }
    sentences.extend(current.finish()?);

    Ok(sentences)
}
