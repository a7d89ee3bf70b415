//! Text segmentation into sentences, words, and syllables.
//!
//! Syllables are found with a vowel-cluster heuristic, not a linguistic model.
//! Punctuation stays attached to the syllable it follows so the prosody engine
//! can see sentence-ending marks.

use std::sync::OnceLock;

use regex::Regex;

/// A sentence is one or more non-terminators followed by terminators, or a
/// trailing unterminated fragment.
const SENTENCE_PATTERN: &str = r"[^.!?]+[.!?]+|[^.!?]+$";

static SENTENCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn sentence_regex() -> &'static Regex {
    SENTENCE_REGEX.get_or_init(|| Regex::new(SENTENCE_PATTERN).expect("invalid regex pattern"))
}

/// One sentence of the input, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position among all sentences of the document, blank ones included.
    pub index: usize,
    /// Sentence text with leading whitespace removed.
    pub text: String,
}

impl Sentence {
    /// Returns true for sentences that produce no output at all.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Returns true if the sentence ends with `!`.
    pub fn is_exclaimed(&self) -> bool {
        self.text.ends_with('!')
    }
}

/// A word classified by what it contributes to the voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Word<'a> {
    /// Zero-length word between consecutive spaces.
    Empty,
    /// Non-empty word without any vowel; it is never voiced.
    Unvoiced(&'a str),
    /// Word split into its syllables.
    Voiced(Vec<&'a str>),
}

/// Splits text into sentences.
///
/// Blank entries are kept so that indices match the source; consumers skip
/// them with [`Sentence::is_blank`].
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    sentence_regex()
        .find_iter(text)
        .enumerate()
        .map(|(index, m)| Sentence {
            index,
            text: m.as_str().trim_start().to_string(),
        })
        .collect()
}

/// Splits a sentence into words on the space character only.
pub fn split_words(sentence: &str) -> Vec<&str> {
    sentence.split(' ').collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Splits a word into syllables.
///
/// A syllable is any leading consonants, a vowel run, and then either every
/// remaining character (when no vowel follows) or a single consonant when it is
/// itself followed by another consonant. Concatenating the result always gives
/// back the word. Returns `None` when the word contains no vowel.
pub fn split_syllables(word: &str) -> Option<Vec<&str>> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let n = chars.len();
    let byte_at = |pos: usize| chars.get(pos).map_or(word.len(), |&(b, _)| b);
    let vowel_at = |pos: usize| is_vowel(chars[pos].1);

    let mut syllables = Vec::new();
    let mut start = 0;

    while start < n {
        let mut end = start;
        while end < n && !vowel_at(end) {
            end += 1;
        }
        if end == n {
            break;
        }
        while end < n && vowel_at(end) {
            end += 1;
        }

        if (end..n).all(|pos| !vowel_at(pos)) {
            end = n;
        } else if end + 1 < n && !vowel_at(end) && !vowel_at(end + 1) {
            end += 1;
        }

        syllables.push(&word[byte_at(start)..byte_at(end)]);
        start = end;
    }

    if syllables.is_empty() {
        None
    } else {
        Some(syllables)
    }
}

/// Splits a sentence into classified words.
pub fn words(sentence: &str) -> Vec<Word<'_>> {
    split_words(sentence)
        .into_iter()
        .map(|word| {
            if word.is_empty() {
                Word::Empty
            } else {
                match split_syllables(word) {
                    Some(syllables) => Word::Voiced(syllables),
                    None => Word::Unvoiced(word),
                }
            }
        })
        .collect()
}

/// Returns true if the syllable ends with `,`, `.`, `!`, or `?`.
pub fn ends_with_punctuation(syllable: &str) -> bool {
    syllable.ends_with(&[',', '.', '!', '?'][..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("Hi! Are you ok?");
        assert_eq!(texts(&sentences), vec!["Hi!", "Are you ok?"]);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].index, 1);
    }

    #[test]
    fn test_split_sentences_keeps_terminator_runs() {
        let sentences = split_sentences("Wait... What?! Fine");
        assert_eq!(texts(&sentences), vec!["Wait...", "What?!", "Fine"]);
    }

    #[test]
    fn test_split_sentences_trailing_whitespace_fragment() {
        let sentences = split_sentences("Hello. ");
        assert_eq!(texts(&sentences), vec!["Hello.", ""]);
        assert!(sentences[1].is_blank());
    }

    #[test]
    fn test_split_sentences_trims_newlines() {
        let sentences = split_sentences("One.\n\nTwo.");
        assert_eq!(texts(&sentences), vec!["One.", "Two."]);
    }

    #[test]
    fn test_split_sentences_degenerate_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("?!.").is_empty());
    }

    #[test]
    fn test_sentence_flags() {
        let sentences = split_sentences("Run! Now.");
        assert!(sentences[0].is_exclaimed());
        assert!(!sentences[1].is_exclaimed());
    }

    #[test]
    fn test_split_words_single_space_only() {
        assert_eq!(split_words("a  b"), vec!["a", "", "b"]);
        assert_eq!(split_words("tab\there"), vec!["tab\there"]);
    }

    #[test]
    fn test_split_syllables_examples() {
        assert_eq!(split_syllables("hello"), Some(vec!["hel", "lo"]));
        assert_eq!(split_syllables("world"), Some(vec!["world"]));
        assert_eq!(split_syllables("ago"), Some(vec!["a", "go"]));
        assert_eq!(split_syllables("ok?"), Some(vec!["ok?"]));
        assert_eq!(split_syllables("Hi!"), Some(vec!["Hi!"]));
        assert_eq!(split_syllables("banana"), Some(vec!["ba", "na", "na"]));
        assert_eq!(split_syllables("YEAH"), Some(vec!["YEAH"]));
    }

    #[test]
    fn test_split_syllables_no_vowel() {
        assert_eq!(split_syllables("Hmm."), None);
        assert_eq!(split_syllables(""), None);
        assert_eq!(split_syllables("..."), None);
    }

    #[test]
    fn test_split_syllables_reconstructs_word() {
        for word in [
            "strengths",
            "rhythm",
            "extraordinary",
            "that's",
            "Well,",
            "queueing",
            "naïve",
            "crwth-y",
            "a",
            "eye",
        ] {
            if let Some(syllables) = split_syllables(word) {
                assert_eq!(syllables.concat(), word, "lost characters in {:?}", word);
            }
        }
    }

    #[test]
    fn test_words_classification() {
        assert_eq!(
            words("Hmm  ok."),
            vec![Word::Unvoiced("Hmm"), Word::Empty, Word::Voiced(vec!["ok."])]
        );
    }

    #[test]
    fn test_ends_with_punctuation() {
        assert!(ends_with_punctuation("well,"));
        assert!(ends_with_punctuation("fine."));
        assert!(ends_with_punctuation("hi!"));
        assert!(ends_with_punctuation("ok?"));
        assert!(!ends_with_punctuation("no;"));
        assert!(!ends_with_punctuation("yes"));
    }
}
