use thiserror::Error;

use crate::model::{Document, ModelError};

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("no annotation covers the text at {0:?}")]
    Unannotated(String),

    #[error("annotation engine produced an invalid document: {0}")]
    Model(#[from] ModelError),
}

/// Seam to the external linguistic annotation engine.
///
/// Implementations tokenize, tag, parse and analyse morphology; the
/// extraction core only reads the resulting [`Document`]. Engines are
/// shared read-only across requests.
pub trait Annotator: Send + Sync {
    /// Human-readable engine identifier.
    fn name(&self) -> &str;

    /// Annotate raw text. Empty input yields an empty document.
    fn annotate(&self, text: &str) -> Result<Document, AnnotateError>;
}
