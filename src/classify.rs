//! Per-word phonological classification.
//!
//! Every predicate here re-reads the word from scratch: classification is
//! never cached or threaded between stages, so the transcriber and the
//! marker post-processor stay independent of each other's inputs.

use crate::script::ScriptEntry;

/// Vowel-harmony class of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    Front,
    Back,
}

/// Everything the converter needs to know about one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordClassification {
    pub harmony: Harmony,
    pub is_loanword: bool,
    pub is_i_initial_native: bool,
}

/// Classify one word. Pure function of the word and the frozen tables.
pub fn classify(word: &str, entry: &ScriptEntry) -> WordClassification {
    WordClassification {
        harmony: harmony_of(word, entry),
        is_loanword: is_loanword(word, entry),
        is_i_initial_native: is_i_initial_native(word, entry),
    }
}

/// Harmony class of a word's first syllable.
///
/// An ordered cascade; each rule assumes the ones above it did not match,
/// so the order must not change:
///
/// 1. `қ`/`ғ` anywhere → back. These consonants only occur in hard words.
/// 2. `к`/`г` anywhere → front. More reliable than vowels, especially for
///    words built around the neutral letter `и`.
/// 3. listed i-initial native word → front.
/// 4. front-harmony numeral prefix + hard root → the root's first vowel
///    decides (бесжылдық is a back word despite its `е`).
/// 5. first plain vowel decides. `и э ю я ё` are skipped as neutral.
/// 6. no vowel at all → back.
pub fn harmony_of(word: &str, entry: &ScriptEntry) -> Harmony {
    let lower = word.to_lowercase();

    if lower.chars().any(|c| c == 'қ' || c == 'ғ') {
        return Harmony::Back;
    }
    if lower.chars().any(|c| c == 'к' || c == 'г') {
        return Harmony::Front;
    }

    if entry.i_initial_natives.contains(lower.as_str()) {
        return Harmony::Front;
    }

    for prefix in entry.soft_prefixes {
        if let Some(root) = lower.strip_prefix(prefix) {
            if root.is_empty() {
                continue;
            }
            // A vowel-free root decides nothing and falls through.
            for c in root.chars() {
                if entry.is_front_vowel(c) {
                    return Harmony::Front;
                }
                if entry.is_back_vowel(c) {
                    return Harmony::Back;
                }
            }
        }
    }

    for c in lower.chars() {
        if entry.is_front_vowel(c) {
            return Harmony::Front;
        }
        if entry.is_back_vowel(c) {
            return Harmony::Back;
        }
    }
    Harmony::Back
}

/// Loanword heuristics, in check order:
/// non-native consonant, listed suffix, vowel hiatus, 3-consonant cluster.
/// Listed i-initial natives are exempt before anything else runs.
pub fn is_loanword(word: &str, entry: &ScriptEntry) -> bool {
    let lower = word.to_lowercase();

    if entry.i_initial_natives.contains(lower.as_str()) {
        return false;
    }

    if word.chars().any(|c| entry.is_loan_consonant(c)) {
        return true;
    }

    if entry.loan_suffixes.iter().any(|s| lower.ends_with(s)) {
        return true;
    }

    has_vowel_hiatus(&lower, entry) || has_consonant_cluster(&lower, entry)
}

/// Lowercased membership test against the i-initial exception list.
pub fn is_i_initial_native(word: &str, entry: &ScriptEntry) -> bool {
    entry.i_initial_natives.contains(word.to_lowercase().as_str())
}

/// Native vocabulary never writes two vowels in a row. The two legitimate
/// same-height sequences `иі`/`іи` are collapsed before the adjacency scan.
fn has_vowel_hiatus(lower: &str, entry: &ScriptEntry) -> bool {
    let collapsed = lower.replace("иі", "_").replace("іи", "_");
    let mut run = 0usize;
    for c in collapsed.chars() {
        if entry.hiatus_vowels.contains(&c) {
            run += 1;
            if run >= 2 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// Three or more consecutive consonant letters. The counter resets on any
/// vowel and on any non-letter.
fn has_consonant_cluster(lower: &str, entry: &ScriptEntry) -> bool {
    let mut run = 0usize;
    for c in lower.chars() {
        if c.is_alphabetic() && !entry.cluster_vowels.contains(&c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::data::CYR_TO_ARAB;

    fn harmony(word: &str) -> Harmony {
        harmony_of(word, &CYR_TO_ARAB)
    }

    fn loan(word: &str) -> bool {
        is_loanword(word, &CYR_TO_ARAB)
    }

    #[test]
    fn strong_consonants_outrank_vowels() {
        // е is front, but қ decides
        assert_eq!(harmony("бесжылдық"), Harmony::Back);
        assert_eq!(harmony("қазақ"), Harmony::Back);
        // ы is back, but к decides
        assert_eq!(harmony("кітап"), Harmony::Front);
        assert_eq!(harmony("жігер"), Harmony::Front);
    }

    #[test]
    fn i_initial_natives_are_front() {
        assert_eq!(harmony("ит"), Harmony::Front);
        assert_eq!(harmony("иіс"), Harmony::Front);
        assert_eq!(harmony("Ине"), Harmony::Front);
    }

    #[test]
    fn numeral_prefix_defers_to_root() {
        // бес + атар: the root's а wins over the prefix's е
        assert_eq!(harmony("бесатар"), Harmony::Back);
        // жеті + ата
        assert_eq!(harmony("жетіата"), Harmony::Back);
        // vowel-free remainder falls through to the plain scan
        assert_eq!(harmony("бест"), Harmony::Front);
    }

    #[test]
    fn first_plain_vowel_decides() {
        assert_eq!(harmony("сәлем"), Harmony::Front);
        assert_eq!(harmony("бала"), Harmony::Back);
        assert_eq!(harmony("өнер"), Harmony::Front);
        // и is neutral and skipped; і then decides
        assert_eq!(harmony("тиіс"), Harmony::Front);
    }

    #[test]
    fn vowel_free_word_defaults_to_back() {
        assert_eq!(harmony("брр"), Harmony::Back);
        assert_eq!(harmony(""), Harmony::Back);
    }

    #[test]
    fn loanword_consonants() {
        assert!(loan("федерация"));
        assert!(loan("вагон"));
        assert!(loan("Цирк"));
        assert!(!loan("сәлем"));
    }

    #[test]
    fn loanword_suffixes() {
        assert!(loan("экономика"));
        assert!(loan("социализм"));
        assert!(loan("биология"));
    }

    #[test]
    fn vowel_hiatus_marks_loanwords() {
        assert!(loan("аэропорт"));
        assert!(loan("тиын")); // иы is a hiatus
        // the two legitimate sequences are not a hiatus
        assert!(!loan("тиіс"));
        assert!(!loan("киім"));
    }

    #[test]
    fn consonant_clusters_mark_loanwords() {
        assert!(loan("абстракт"));
        assert!(!loan("достық")); // ст is only two
        // non-letters reset the counter
        assert!(!loan("қс2тр"));
    }

    #[test]
    fn i_initial_natives_are_never_loanwords() {
        // иіс would otherwise trip the hiatus check before collapsing
        assert!(!loan("иіс"));
        assert!(!loan("ию"));
    }

    #[test]
    fn classify_bundles_all_three() {
        let c = classify("ит", &CYR_TO_ARAB);
        assert_eq!(c.harmony, Harmony::Front);
        assert!(!c.is_loanword);
        assert!(c.is_i_initial_native);
    }
}
