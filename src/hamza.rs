//! Glottal-marker post-processing.
//!
//! Runs on the transcribed word together with the ORIGINAL source word and
//! re-derives every classification it needs — deliberately not reusing
//! anything the transcriber computed.

use crate::classify::{Harmony, harmony_of, is_i_initial_native, is_loanword};
use crate::script::ScriptEntry;

/// Decide the glottal marker for one transcribed word.
///
/// Top-down, first match wins; the order is load-bearing:
///
/// 1. loanword → no marker, ever;
/// 2. i-initial native → exactly one marker;
/// 3. `к`/`г` anywhere in the source → the signal letter already carries
///    the front reading, the marker would be wrong;
/// 4. source has `е`: marker only when the word STARTS with `ө ү і`;
/// 5. no `е`, word starts with `ө ү і` → marker;
/// 6. fall back to harmony: back strips, front prefixes.
pub fn apply_hamza(raw: String, word: &str, entry: &ScriptEntry) -> String {
    if is_loanword(word, entry) {
        return strip_marker(raw, entry);
    }
    if is_i_initial_native(word, entry) {
        return prefix_marker(raw, entry);
    }

    let lower = word.to_lowercase();
    if has_signal_consonant(&lower, entry) {
        return strip_marker(raw, entry);
    }

    let high_front_initial = matches!(lower.chars().next(), Some('ө' | 'ү' | 'і'));

    if lower.contains('е') {
        return if high_front_initial {
            prefix_marker(raw, entry)
        } else {
            strip_marker(raw, entry)
        };
    }

    if high_front_initial {
        return prefix_marker(raw, entry);
    }

    match harmony_of(word, entry) {
        Harmony::Back => strip_marker(raw, entry),
        Harmony::Front => prefix_marker(raw, entry),
    }
}

/// Consonant members of the source signal set — `к` and `г`. The vowel
/// member `е` has its own cascade step.
fn has_signal_consonant(lower: &str, entry: &ScriptEntry) -> bool {
    lower
        .chars()
        .any(|c| entry.hamza_signals_src.contains(&c) && entry.consonant(c).is_some())
}

/// True when the transcribed text carries a target-side signal letter
/// (`ك گ ە`). Rule-derived output never pairs `ك`/`گ` with the marker.
pub fn has_target_signal(text: &str, entry: &ScriptEntry) -> bool {
    text.chars().any(|c| entry.hamza_signals_dst.contains(&c))
}

/// Remove every marker occurrence, not just a leading one.
fn strip_marker(raw: String, entry: &ScriptEntry) -> String {
    if !raw.contains(entry.hamza) {
        return raw;
    }
    raw.chars().filter(|c| *c != entry.hamza).collect()
}

/// Prefix one marker. Idempotent: an already-marked word is untouched.
fn prefix_marker(raw: String, entry: &ScriptEntry) -> String {
    if raw.starts_with(entry.hamza) {
        return raw;
    }
    let mut out = String::with_capacity(entry.hamza.len_utf8() + raw.len());
    out.push(entry.hamza);
    out.push_str(&raw);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::data::{CYR_TO_ARAB, HAMZA};
    use crate::transcribe::transcribe;

    fn convert(word: &str) -> String {
        apply_hamza(transcribe(word, &CYR_TO_ARAB), word, &CYR_TO_ARAB)
    }

    #[test]
    fn loanwords_never_get_the_marker() {
        assert_eq!(convert("федерация"), "فەدەراتسىيا");
        assert_eq!(convert("цирк"), "تسىيرك");
    }

    #[test]
    fn i_initial_natives_always_get_it() {
        assert_eq!(convert("ит"), "ٴىيت");
        assert_eq!(convert("иіс"), "ٴىيىس");
    }

    #[test]
    fn signal_consonants_suppress_it() {
        assert_eq!(convert("кітап"), "كىتاپ");
        assert_eq!(convert("мектеп"), "مەكتەپ");
        assert_eq!(convert("жігер"), "جىگەر");
    }

    #[test]
    fn e_defers_to_the_first_letter() {
        // has е, starts with ө → marked
        assert_eq!(convert("өтем"), "ٴوتەم");
        // has е, starts elsewhere → bare
        assert_eq!(convert("сәлем"), "سالەم");
        assert_eq!(convert("елінде"), "ەلىندە");
    }

    #[test]
    fn high_front_initial_without_e() {
        assert_eq!(convert("өмір"), "ٴومىر");
        assert_eq!(convert("ісі"), "ٴىسى");
    }

    #[test]
    fn e_with_high_front_initial_is_marked() {
        assert_eq!(convert("үйде"), "ٴۇيدە");
    }

    #[test]
    fn harmony_fallback() {
        assert_eq!(convert("сүт"), "ٴسۇت");
        assert_eq!(convert("достық"), "دوستىق");
        assert_eq!(convert("бала"), "بالا");
    }

    #[test]
    fn prefix_is_idempotent() {
        let marked = format!("{HAMZA}سۇت");
        let again = apply_hamza(marked.clone(), "сүт", &CYR_TO_ARAB);
        assert_eq!(again, marked);
        assert!(!again.contains("ٴٴ"));
    }

    #[test]
    fn strip_removes_every_occurrence() {
        let noisy = format!("{HAMZA}دوس{HAMZA}تىق");
        assert_eq!(apply_hamza(noisy, "достық", &CYR_TO_ARAB), "دوستىق");
    }

    #[test]
    fn target_signals_never_coexist_with_the_marker() {
        for word in ["кітап", "мектеп", "гүл", "еркін"] {
            let out = convert(word);
            if has_target_signal(&out, &CYR_TO_ARAB) {
                assert!(!out.contains(HAMZA), "{word} → {out}");
            }
        }
    }
}
