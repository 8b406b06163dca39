//! Fixed German vocabularies consumed by the extraction core.
//!
//! A [`Lexicon`] is built once at startup, either from the built-in
//! German tables or from a TOML override file, and is read-only afterwards.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use lemma_protocol::Article;
use serde::Deserialize;
use thiserror::Error;

mod german;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("could not read lexicon file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// On-disk shape of a lexicon override. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LexiconFile {
    articles: Option<HashMap<String, Article>>,
    gendered_indefinites: Option<Vec<String>>,
    separable_particles: Option<Vec<String>>,
    separable_particle_tag: Option<String>,
    exclusions: Option<Vec<String>>,
    auxiliary_lemmas: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    articles: HashMap<String, Article>,
    gendered_indefinites: HashSet<String>,
    separable_particles: HashSet<String>,
    separable_particle_tag: String,
    exclusions: HashSet<String>,
    auxiliary_lemmas: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::german()
    }
}

impl Lexicon {
    /// The built-in German vocabularies.
    pub fn german() -> Self {
        Self {
            articles: german::ARTICLES
                .iter()
                .map(|&(form, article)| (form.to_string(), article))
                .collect(),
            gendered_indefinites: to_set(german::GENDERED_INDEFINITES),
            separable_particles: to_set(german::SEPARABLE_PARTICLES),
            separable_particle_tag: german::SEPARABLE_PARTICLE_TAG.to_string(),
            exclusions: to_set(german::EXCLUSIONS),
            auxiliary_lemmas: to_set(german::AUXILIARY_LEMMAS),
        }
    }

    /// Parses a TOML override; missing tables keep their German defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(source)?;
        let mut lexicon = Self::german();

        if let Some(articles) = file.articles {
            lexicon.articles = articles
                .into_iter()
                .map(|(form, article)| (form.to_lowercase(), article))
                .collect();
        }
        if let Some(words) = file.gendered_indefinites {
            lexicon.gendered_indefinites = lowercase_set(words);
        }
        if let Some(words) = file.separable_particles {
            lexicon.separable_particles = lowercase_set(words);
        }
        if let Some(tag) = file.separable_particle_tag {
            lexicon.separable_particle_tag = tag;
        }
        if let Some(words) = file.exclusions {
            lexicon.exclusions = lowercase_set(words);
        }
        if let Some(words) = file.auxiliary_lemmas {
            lexicon.auxiliary_lemmas = lowercase_set(words);
        }

        Ok(lexicon)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Article a determiner form maps to. Expects cleaned lowercase text.
    pub fn article(&self, cleaned: &str) -> Option<Article> {
        self.articles.get(cleaned).copied()
    }

    pub fn is_determiner(&self, cleaned: &str) -> bool {
        self.articles.contains_key(cleaned)
    }

    /// Indefinite forms ("ein", "eine") whose article follows the noun's gender.
    pub fn is_gendered_indefinite(&self, cleaned: &str) -> bool {
        self.gendered_indefinites.contains(cleaned)
    }

    pub fn is_separable_particle(&self, lower: &str) -> bool {
        self.separable_particles.contains(lower)
    }

    /// Whether a fine tag marks a detached verb prefix.
    pub fn is_separable_tag(&self, tag: &str) -> bool {
        tag == self.separable_particle_tag
    }

    pub fn is_excluded(&self, lemma: &str) -> bool {
        self.exclusions.contains(lemma)
    }

    pub fn is_auxiliary(&self, lemma: &str) -> bool {
        self.auxiliary_lemmas.contains(lemma)
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn lowercase_set(words: Vec<String>) -> HashSet<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_articles() {
        let lexicon = Lexicon::german();

        assert_eq!(lexicon.article("dem"), Some(Article::Der));
        assert_eq!(lexicon.article("einer"), Some(Article::Die));
        assert_eq!(lexicon.article("eure"), Some(Article::Die));
        assert_eq!(lexicon.article("das"), Some(Article::Das));
        assert_eq!(lexicon.article("hund"), None);

        assert!(lexicon.is_determiner("unseres"));
        assert!(lexicon.is_gendered_indefinite("eine"));
        assert!(!lexicon.is_gendered_indefinite("einem"));
    }

    #[test]
    fn test_german_particles_and_exclusions() {
        let lexicon = Lexicon::german();

        assert!(lexicon.is_separable_particle("zurück"));
        assert!(lexicon.is_separable_particle("auf"));
        assert!(!lexicon.is_separable_particle("um"));
        assert!(lexicon.is_separable_tag("PTKVZ"));
        assert!(!lexicon.is_separable_tag("PTKNEG"));

        assert!(lexicon.is_excluded("für"));
        assert!(lexicon.is_auxiliary("werden"));
        assert!(!lexicon.is_auxiliary("gehen"));
    }

    #[test]
    fn test_toml_override_keeps_missing_tables() {
        let source = r#"
            separable_particles = ["Heim", "ab"]
            exclusions = ["Desto"]

            [articles]
            Der = "der"
            jene = "die"
        "#;
        let lexicon = Lexicon::from_toml_str(source).unwrap();

        assert!(lexicon.is_separable_particle("heim"));
        assert!(!lexicon.is_separable_particle("auf"));
        assert!(lexicon.is_excluded("desto"));
        assert!(!lexicon.is_excluded("und"));
        assert_eq!(lexicon.article("jene"), Some(Article::Die));
        assert_eq!(lexicon.article("der"), Some(Article::Der));
        assert!(!lexicon.is_determiner("mein"));

        // Untouched tables fall back to German
        assert!(lexicon.is_gendered_indefinite("ein"));
        assert!(lexicon.is_auxiliary("haben"));
    }

    #[test]
    fn test_toml_rejects_unknown_article() {
        let err = Lexicon::from_toml_str("[articles]\nein = \"den\"\n").unwrap_err();
        assert!(matches!(err, LexiconError::Toml(_)));
    }

    #[test]
    fn test_toml_rejects_unknown_table() {
        assert!(Lexicon::from_toml_str("stopwords = [\"und\"]").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Lexicon::load("/nonexistent/lexicon.toml").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
