pub mod article;
pub mod batch;
pub mod classifier;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod separable;

pub use article::ArticleResolver;
pub use batch::{split_article, BatchNormalizer, BatchOutcome, Rejection};
pub use classifier::{Classifier, DropReason, Verdict};
pub use emit::{Emitter, SeenSet};
pub use error::ExtractError;
pub use pipeline::LemmaExtractor;
pub use separable::{Fusion, Reconstructor};
