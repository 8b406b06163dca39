use lemma_protocol::Article::{self, Das, Der, Die};

/// Determiner forms and the article each one points to. Possessives follow
/// the indefinite pattern: "-e"/"-er" forms are feminine, the rest masculine.
#[rustfmt::skip]
pub(crate) const ARTICLES: &[(&str, Article)] = &[
    // definite
    ("der", Der), ("die", Die), ("das", Das),
    ("den", Der), ("dem", Der), ("des", Der),
    // indefinite
    ("ein", Der), ("eine", Die), ("einem", Der),
    ("einen", Der), ("einer", Die), ("eines", Der),
    // possessive
    ("mein", Der), ("meine", Die), ("meinen", Der), ("meinem", Der), ("meines", Der),
    ("dein", Der), ("deine", Die), ("deinen", Der), ("deinem", Der), ("deines", Der),
    ("sein", Der), ("seine", Die), ("seinen", Der), ("seinem", Der), ("seines", Der),
    ("ihr", Der), ("ihre", Die), ("ihren", Der), ("ihrem", Der), ("ihres", Der),
    ("unser", Der), ("unsere", Die), ("unseren", Der), ("unserem", Der), ("unseres", Der),
    ("euer", Der), ("eure", Die), ("eueren", Der), ("eurem", Der), ("eures", Der),
];

pub(crate) const GENDERED_INDEFINITES: &[&str] = &["ein", "eine"];

#[rustfmt::skip]
pub(crate) const SEPARABLE_PARTICLES: &[&str] = &[
    "ab", "an", "auf", "aus", "bei", "ein", "fest", "fort", "los", "mit",
    "nach", "nieder", "vor", "weg", "weiter", "zu", "zurück", "zusammen",
];

/// STTS tag for a detached verb prefix.
pub(crate) const SEPARABLE_PARTICLE_TAG: &str = "PTKVZ";

/// Lemmas never kept by batch normalization.
#[rustfmt::skip]
pub(crate) const EXCLUSIONS: &[&str] = &[
    "sein", "daran", "dran", "je", "desto", "umso", "in", "und", "am",
    "von", "zu", "mit", "auf", "für", "aus", "bei", "nach", "seit",
];

pub(crate) const AUXILIARY_LEMMAS: &[&str] = &["sein", "haben", "werden"];
