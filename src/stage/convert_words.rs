//! stage/convert_words.rs – the segmenter and per-word orchestrator.
//!
//! Scans the text for maximal runs of source-script letters (a run may
//! embed single hyphens joining two letter groups), sends each run through
//! the dictionary short-circuit or the classify → transcribe → marker
//! pipeline, and copies everything else through verbatim.

use crate::{
    context::Context,
    hamza::apply_hamza,
    script::{ScriptEntry, is_source_letter},
    stage::{Stage, StageError},
    transcribe::transcribe,
};
use smallvec::SmallVec;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertWords;

impl Stage for ConvertWords {
    fn name(&self) -> &'static str {
        "convert_words"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(is_source_letter))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let src = text.as_ref();
        let mut out = String::with_capacity(src.len() + src.len() / 8);
        let mut i = 0;

        while i < src.len() {
            match src[i..].char_indices().find(|&(_, c)| is_source_letter(c)) {
                None => {
                    out.push_str(&src[i..]);
                    break;
                }
                Some((off, _)) => {
                    out.push_str(&src[i..i + off]);
                    let start = i + off;
                    let mut end = letter_span_end(src, start);
                    // A hyphen continues the run only when letters follow it.
                    while src[end..].starts_with('-') {
                        let cont = letter_span_end(src, end + 1);
                        if cont == end + 1 {
                            break;
                        }
                        end = cont;
                    }
                    convert_run(&src[start..end], &ctx.entry, &mut out);
                    i = end;
                }
            }
        }
        Ok(Cow::Owned(out))
    }
}

/// End (byte offset) of the contiguous letter span starting at `from`.
#[inline]
fn letter_span_end(src: &str, from: usize) -> usize {
    src[from..]
        .char_indices()
        .find(|&(_, c)| !is_source_letter(c))
        .map_or(src.len(), |(off, _)| from + off)
}

/// Convert one run. The WHOLE run — hyphens included — gets a dictionary
/// probe first; only an undictionaried compound is split into parts.
fn convert_run(run: &str, entry: &ScriptEntry, out: &mut String) {
    let lower = run.to_lowercase();
    if let Some(hit) = lookup(&lower, entry) {
        out.push_str(hit);
        return;
    }

    if run.contains('-') {
        let parts: SmallVec<[&str; 4]> = run.split('-').collect();
        for (n, part) in parts.iter().enumerate() {
            if n > 0 {
                out.push('-');
            }
            out.push_str(&convert_word(part, entry));
        }
        return;
    }

    out.push_str(&convert_word(run, entry));
}

/// Convert one hyphen-free word: dictionary probe, then the rule pipeline.
/// The marker step re-derives classification from the source word itself.
pub(crate) fn convert_word(word: &str, entry: &ScriptEntry) -> String {
    if word.is_empty() {
        return String::new();
    }
    let lower = word.to_lowercase();
    if let Some(hit) = lookup(&lower, entry) {
        return (*hit).to_string();
    }
    apply_hamza(transcribe(word, entry), word, entry)
}

/// Two-tier dictionary: proper nouns shadow exception words.
#[inline]
fn lookup<'e>(lower: &str, entry: &'e ScriptEntry) -> Option<&'e &'static str> {
    entry
        .proper_nouns
        .get(lower)
        .or_else(|| entry.exception_words.get(lower))
}
