use lemma_protocol::AnnotateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("annotation failed: {0}")]
    Annotate(#[from] AnnotateError),

    #[error("batch entry {index} ({word:?}) could not be annotated: {source}")]
    Entry {
        index: usize,
        word: String,
        #[source]
        source: AnnotateError,
    },
}
