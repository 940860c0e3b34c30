//! Character-level transcription: one word in, raw Arabic script out.
//!
//! A single left-to-right scan with one character of lookbehind on the raw
//! source (never on emitted output). The glottal marker is not this
//! module's business; [`crate::hamza`] decides it afterwards.

use crate::classify::is_loanword;
use crate::script::{ScriptEntry, lower_char};

/// Transcribe one word, without the glottal marker.
///
/// Per character, first match wins:
/// - `ь`/`ъ` emit nothing;
/// - `ю` is `/u/` in loanwords (`ۋ`) and `/ju/` natively (`يۋ`);
/// - `ц щ ё` always go through the combination table;
/// - `я` after `и` drops its glide — the `и` already wrote one;
/// - `и` is always the `ىي` digraph, harmony notwithstanding;
/// - then the consonant map, the vowel map, and verbatim pass-through.
pub fn transcribe(word: &str, entry: &ScriptEntry) -> String {
    let loan = is_loanword(word, entry);
    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;

    for c in word.chars() {
        let cl = lower_char(c);
        match cl {
            'ь' | 'ъ' => {}
            'ю' => out.push_str(if loan { "ۋ" } else { "يۋ" }),
            'ц' | 'щ' | 'ё' => match entry.combination(cl) {
                Some(to) => out.push_str(to),
                None => out.push(c),
            },
            'я' => {
                if prev.map(lower_char) == Some('и') {
                    out.push('ا');
                } else {
                    match entry.combination(cl) {
                        Some(to) => out.push_str(to),
                        None => out.push(c),
                    }
                }
            }
            'и' => out.push_str("ىي"),
            _ => match entry.consonant(c).or_else(|| entry.vowel(c)) {
                Some(to) => out.push_str(to),
                None => out.push(c),
            },
        }
        prev = Some(c);
    }
    out
}
