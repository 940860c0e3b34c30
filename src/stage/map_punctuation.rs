use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr3;
use std::borrow::Cow;

/// Replace source punctuation with its Arabic-script counterpart.
///
/// Runs before word conversion, over the whole text. Each mapped symbol is
/// substituted wherever it occurs; the substituted output is never itself
/// a table key, so nothing is re-matched.
///
/// ## Substitutions performed
///
/// | Source | Target |
/// |--------|--------|
/// | `,`    | `،`    |
/// | `;`    | `؛`    |
/// | `?`    | `؟`    |
/// | `. : !` | unchanged (identity rows) |
pub struct MapPunctuation;

impl Stage for MapPunctuation {
    fn name(&self) -> &'static str {
        "map_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        // The non-identity table rows are exactly `, ; ?` — all ASCII, so a
        // byte probe is enough (see the table invariant test below).
        Ok(memchr3(b',', b';', b'?', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(
            text.chars()
                .map(|c| ctx.entry.punctuation_for(c).unwrap_or(c))
                .collect(),
        ))
    }
}
