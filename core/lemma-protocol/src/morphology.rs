use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    /// Parses a Universal Dependencies `Gender` value.
    pub fn from_ud(value: &str) -> Option<Self> {
        match value {
            "Masc" => Some(Gender::Masculine),
            "Fem" => Some(Gender::Feminine),
            "Neut" => Some(Gender::Neuter),
            _ => None,
        }
    }

    /// The nominative singular definite article marking this gender.
    pub const fn article(self) -> Article {
        match self {
            Gender::Masculine => Article::Der,
            Gender::Feminine => Article::Die,
            Gender::Neuter => Article::Das,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub fn from_ud(value: &str) -> Option<Self> {
        match value {
            "Sing" => Some(Number::Singular),
            "Plur" => Some(Number::Plural),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    pub const fn as_str(self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "der" => Some(Article::Der),
            "die" => Some(Article::Die),
            "das" => Some(Article::Das),
            _ => None,
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse part-of-speech category (Universal POS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    Space,
    X,
}

impl Pos {
    /// Parses a UPOS label. Unknown labels fall back to `X`.
    pub fn from_upos(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "ADJ" => Pos::Adj,
            "ADP" => Pos::Adp,
            "ADV" => Pos::Adv,
            "AUX" => Pos::Aux,
            "CCONJ" | "CONJ" => Pos::Cconj,
            "DET" => Pos::Det,
            "INTJ" => Pos::Intj,
            "NOUN" => Pos::Noun,
            "NUM" => Pos::Num,
            "PART" => Pos::Part,
            "PRON" => Pos::Pron,
            "PROPN" => Pos::Propn,
            "PUNCT" => Pos::Punct,
            "SCONJ" => Pos::Sconj,
            "SYM" => Pos::Sym,
            "VERB" => Pos::Verb,
            "SPACE" => Pos::Space,
            _ => Pos::X,
        }
    }

    pub const fn flag(self) -> PosSet {
        match self {
            Pos::Adj => PosSet::ADJ,
            Pos::Adp => PosSet::ADP,
            Pos::Adv => PosSet::ADV,
            Pos::Aux => PosSet::AUX,
            Pos::Cconj => PosSet::CCONJ,
            Pos::Det => PosSet::DET,
            Pos::Intj => PosSet::INTJ,
            Pos::Noun => PosSet::NOUN,
            Pos::Num => PosSet::NUM,
            Pos::Part => PosSet::PART,
            Pos::Pron => PosSet::PRON,
            Pos::Propn => PosSet::PROPN,
            Pos::Punct => PosSet::PUNCT,
            Pos::Sconj => PosSet::SCONJ,
            Pos::Sym => PosSet::SYM,
            Pos::Verb => PosSet::VERB,
            Pos::Space => PosSet::SPACE,
            Pos::X => PosSet::X,
        }
    }

    /// Nouns and proper nouns, the only categories that carry an article.
    pub const fn is_nominal(self) -> bool {
        matches!(self, Pos::Noun | Pos::Propn)
    }

    pub const fn is_verbal(self) -> bool {
        matches!(self, Pos::Verb | Pos::Aux)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct PosSet: u32 {
        const ADJ = 1;
        const ADP = 1 << 1;
        const ADV = 1 << 2;
        const AUX = 1 << 3;
        const CCONJ = 1 << 4;
        const DET = 1 << 5;
        const INTJ = 1 << 6;
        const NOUN = 1 << 7;
        const NUM = 1 << 8;
        const PART = 1 << 9;
        const PRON = 1 << 10;
        const PROPN = 1 << 11;
        const PUNCT = 1 << 12;
        const SCONJ = 1 << 13;
        const SYM = 1 << 14;
        const VERB = 1 << 15;
        const SPACE = 1 << 16;
        const X = 1 << 17;

        // Content words worth reporting
        const CONTENT = Self::NOUN.bits() | Self::PROPN.bits() | Self::ADJ.bits() | Self::VERB.bits();

        // Closed-class function words
        const FUNCTION = Self::PRON.bits()
            | Self::DET.bits()
            | Self::ADP.bits()
            | Self::AUX.bits()
            | Self::CCONJ.bits()
            | Self::SCONJ.bits()
            | Self::PART.bits()
            | Self::INTJ.bits()
            | Self::SYM.bits();
    }
}

impl PosSet {
    pub fn has(self, pos: Pos) -> bool {
        self.contains(pos.flag())
    }
}

/// Morphological feature bag: feature name -> ordered values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Morph {
    features: Vec<(String, Vec<String>)>,
}

impl Morph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends values to `name`, creating the feature if needed.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let values = values.into_iter().map(Into::into);
        match self.features.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => existing.extend(values),
            None => self.features.push((name, values.collect())),
        }
    }

    /// Values of `name`, empty if the feature is absent.
    pub fn get(&self, name: &str) -> &[String] {
        self.features
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn gender(&self) -> Option<Gender> {
        self.get("Gender").first().and_then(|v| Gender::from_ud(v))
    }

    pub fn number(&self) -> Option<Number> {
        self.get("Number").first().and_then(|v| Number::from_ud(v))
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.features.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }
}

impl fmt::Display for Morph {
    /// Writes the UD `FEATS` form, `_` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.features.is_empty() {
            return f.write_str("_");
        }
        for (i, (name, values)) in self.features.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}={}", name, values.join(","))?;
        }
        Ok(())
    }
}
