use once_cell::sync::Lazy;
use regex::Regex;

// Words (with inner apostrophes or hyphens) or single non-space symbols.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]")
        .expect("word pattern is a valid regex")
});

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Splits text into word and punctuation tokens, Treebank style.
///
/// Contractions are split into their stem and clitic (`"don't"` becomes
/// `"do"`, `"n't"`; `"phone's"` becomes `"phone"`, `"'s"`). Case is preserved.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for m in WORD_PATTERN.find_iter(text) {
        let word = m.as_str().replace('’', "'");
        split_clitic(word, &mut tokens);
    }

    tokens
}

fn split_clitic(word: String, tokens: &mut Vec<String>) {
    let lower = word.to_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = word.len() - 3;
        tokens.push(word[..cut].to_string());
        tokens.push(word[cut..].to_string());
        return;
    }

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let cut = word.len() - clitic.len();
            tokens.push(word[..cut].to_string());
            tokens.push(word[cut..].to_string());
            return;
        }
    }

    tokens.push(word);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_punctuation() {
        assert_eq!(
            word_tokenize("battery lasts all day, excellent battery!"),
            vec!["battery", "lasts", "all", "day", ",", "excellent", "battery", "!"]
        );
    }

    #[test]
    fn splits_contractions() {
        assert_eq!(word_tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(word_tokenize("phone’s screen"), vec!["phone", "'s", "screen"]);
        assert_eq!(word_tokenize("it'll"), vec!["it", "'ll"]);
    }

    #[test]
    fn keeps_hyphenated_words() {
        assert_eq!(word_tokenize("low-light shots"), vec!["low-light", "shots"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(word_tokenize("   ").is_empty());
    }
}
