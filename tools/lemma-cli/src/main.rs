use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use lemma_conllu::ConlluAnnotator;
use lemma_extract::{BatchNormalizer, LemmaExtractor};
use lemma_lexicon::Lexicon;
use lemma_protocol::{BatchEntry, LemmaRecord};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Extracts German lemmas and articles from annotated text")]
struct Cli {
    /// CoNLL-U annotations exported from a German model
    #[arg(short, long, value_name = "FILE", env = "LEMMA_ANNOTATIONS")]
    annotations: PathBuf,

    /// TOML file overriding the built-in vocabularies
    #[arg(short, long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the lemma records of a text as JSON
    Lemmatize {
        /// Text to analyse; read from stdin when neither TEXT nor --input is given
        text: Option<String>,

        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,
    },
    /// Normalize a JSON array of {word, translation} dictionary entries
    Normalize {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Where the rejected lemmas are written
        #[arg(long, value_name = "FILE", default_value = "removed_words.json")]
        removed: PathBuf,
    },
}

#[derive(Serialize)]
struct LemmaResponse<'a> {
    lemmas: &'a [LemmaRecord],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexicon = match &cli.lexicon {
        Some(path) => Lexicon::load(path)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?,
        None => Lexicon::german(),
    };
    let annotator = load_annotator(&cli.annotations)?;

    match cli.command {
        Command::Lemmatize { text, input } => {
            let text = match (text, input) {
                (Some(text), _) => text,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                (None, None) => io::read_to_string(io::stdin()).context("failed to read stdin")?,
            };

            let extractor = LemmaExtractor::new(lexicon.into());
            let lemmas = extractor.lemmatize(&annotator, &text)?;
            let json = to_pretty_json(&LemmaResponse { lemmas: &lemmas })?;
            println!("{}", String::from_utf8_lossy(&json));
        }
        Command::Normalize {
            input,
            output,
            removed,
        } => normalize(&annotator, &lexicon, &input, &output, &removed)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// The engine is required for every command, so a missing file ends the run.
fn load_annotator(path: &Path) -> anyhow::Result<ConlluAnnotator> {
    let annotator = ConlluAnnotator::open(path).with_context(|| {
        format!(
            "could not load annotations from {}\n\
             Export CoNLL-U from a German model first, for example:\n  \
             python -m spacy download de_core_news_md\n\
             then annotate your text with de_core_news_md, save the result as CoNLL-U \
             and pass it with --annotations or LEMMA_ANNOTATIONS",
            path.display()
        )
    })?;
    info!(sentences = annotator.len(), "annotation engine ready");
    Ok(annotator)
}

/// Both output files are serialized before either is written, so bad
/// input never leaves partial output behind.
fn normalize(
    annotator: &ConlluAnnotator,
    lexicon: &Lexicon,
    input: &Path,
    output: &Path,
    removed: &Path,
) -> anyhow::Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("the input file was not found at {}", input.display()))?;
    let entries: Vec<BatchEntry> = serde_json::from_str(&source)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;

    println!("▶️  Processing {} entries from {:?}...", entries.len(), input);
    let outcome = BatchNormalizer::new(lexicon).normalize(annotator, &entries)?;

    let kept = to_pretty_json(&outcome.entries)?;
    let rejected = to_pretty_json(&outcome.removed)?;
    fs::write(output, kept).with_context(|| format!("could not write to {}", output.display()))?;
    fs::write(removed, rejected)
        .with_context(|| format!("could not write to {}", removed.display()))?;

    println!(
        "✅ Success! {} words were processed and saved to {:?}",
        outcome.entries.len(),
        output
    );
    Ok(())
}

/// JSON with a four-space indent; non-ASCII text is written as is.
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
