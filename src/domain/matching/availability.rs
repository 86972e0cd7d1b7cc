//! Token-overlap comparison for free-text availability answers.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::domain::profile::lexicon::{is_unspecified_marker, normalize};

/// Filler words that never signal a shared time slot.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "de", "a", "o", "e", "para", "com", "em", "no", "na", "durante", "só", "bem", "as", "os",
        "todas", "todos",
    ]
    .into_iter()
    .collect()
});

/// Splits a normalized answer into comparable tokens.
///
/// Separators are whitespace, `,` and `/`. Stop words are dropped and a
/// trailing plural `s` is stripped from tokens longer than one character.
pub fn availability_tokens(normalized: &str) -> HashSet<String> {
    normalized
        .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
        .filter(|word| !word.is_empty() && !STOP_WORDS.contains(word))
        .map(|word| match word.strip_suffix('s') {
            Some(stem) if word.chars().count() > 1 => stem.to_string(),
            _ => word.to_string(),
        })
        .collect()
}

/// True when two raw availability answers share a token or are identical.
///
/// Empty answers and "unspecified" markers never overlap.
pub fn availability_overlaps(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a.is_empty() || b.is_empty() || is_unspecified_marker(&a) || is_unspecified_marker(&b) {
        return false;
    }

    a == b || !availability_tokens(&a).is_disjoint(&availability_tokens(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_drop_stop_words_and_plurals() {
        let tokens = availability_tokens("todas as noites, fins de semana");
        let expected: HashSet<String> = ["noite", "fin", "semana"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn single_letter_s_is_kept() {
        let tokens = availability_tokens("s");
        assert!(tokens.contains("s"));
    }

    #[test]
    fn slash_and_comma_separate_tokens() {
        let tokens = availability_tokens("sábado/domingo,feriado");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.contains("sábado"));
    }

    #[test]
    fn plural_and_singular_overlap() {
        assert!(availability_overlaps("Noites", "só à noite"));
        assert!(availability_overlaps("Fim de semana", "semana toda"));
    }

    #[test]
    fn disjoint_answers_do_not_overlap() {
        assert!(!availability_overlaps("manhã", "madrugada"));
    }

    #[test]
    fn unspecified_answers_never_overlap() {
        assert!(!availability_overlaps("Não especificado", "Não especificado"));
        assert!(!availability_overlaps("n/a", "noite"));
        assert!(!availability_overlaps("", ""));
    }
}
