//! Tokenizer over redacted text.

use vigil_core::constants::PLACEHOLDERS;

/// Remove redaction placeholders so they never count as words or shouting.
pub fn strip_placeholders(text: &str) -> String {
    let mut out = text.to_string();
    for placeholder in PLACEHOLDERS {
        out = out.replace(placeholder, " ");
    }
    out
}

/// Lowercase word tokens, split on anything non-alphanumeric. Stop words kept,
/// so multi-word lexicon phrases can match across them.
pub fn tokenize(text: &str) -> Vec<String> {
    strip_placeholders(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Tokens worth keeping as keywords: longer than two characters, not a stop word.
pub fn content_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|w| w.chars().count() > 2 && !is_stop_word(w))
        .cloned()
        .collect()
}

/// Words of three or more letters written entirely in capitals.
pub fn shouted_words(text: &str) -> usize {
    strip_placeholders(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| {
            w.chars().count() >= 3
                && w.chars().all(|c| c.is_alphabetic())
                && w.chars().all(|c| c.is_uppercase())
        })
        .count()
}

/// Runs of one or more `!`.
pub fn exclamation_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        if c == '!' {
            if !in_run {
                runs += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }
    runs
}

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "the"
            | "and"
            | "for"
            | "are"
            | "but"
            | "not"
            | "you"
            | "all"
            | "can"
            | "had"
            | "her"
            | "was"
            | "one"
            | "our"
            | "out"
            | "has"
            | "his"
            | "how"
            | "its"
            | "may"
            | "new"
            | "now"
            | "see"
            | "way"
            | "who"
            | "did"
            | "get"
            | "got"
            | "let"
            | "say"
            | "she"
            | "too"
            | "use"
            | "this"
            | "that"
            | "with"
            | "have"
            | "from"
            | "they"
            | "been"
            | "will"
            | "what"
            | "when"
            | "your"
            | "just"
            | "than"
            | "them"
            | "then"
            | "into"
            | "some"
            | "there"
            | "their"
            | "about"
            | "would"
            | "could"
            | "again"
            | "since"
            | "still"
            | "anyone"
            | "else"
            | "very"
            | "also"
            | "why"
            | "any"
            | "during"
            | "while"
            | "after"
            | "before"
            | "over"
            | "under"
            | "between"
            | "through"
            | "were"
            | "being"
            | "does"
            | "each"
            | "more"
            | "most"
            | "other"
            | "such"
            | "only"
            | "where"
            | "which"
            | "here"
            | "these"
            | "those"
            | "because"
            | "until"
            | "against"
            | "above"
            | "below"
            | "onto"
            | "upon"
            | "like"
            | "even"
            | "much"
            | "many"
            | "really"
            | "every"
            | "across"
            | "says"
    )
}
