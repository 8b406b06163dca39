//! German stopword flag for tokens whose MISC column carries no `Stop=`
//! attribute. The list comes from the `stop-words` crate.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

static STOP_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| get(LANGUAGE::German).iter().map(|w| w.to_lowercase()).collect());

/// Case-insensitive membership test.
pub fn is_stop_word(form: &str) -> bool {
    STOP_WORDS.contains(&form.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_contain_basics() {
        assert!(is_stop_word("Der"));
        assert!(is_stop_word("auf"));
        assert!(is_stop_word("IST"));
        assert!(!is_stop_word("Hund"));
        assert!(!is_stop_word("aufstehen"));
    }

    #[test]
    fn stop_words_cover_function_adverbs_and_pronouns() {
        for word in ["deshalb", "Trotzdem", "jene", "deren"] {
            assert!(is_stop_word(word), "{word} should be a stopword");
        }
    }
}
