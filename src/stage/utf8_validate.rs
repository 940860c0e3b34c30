use crate::{
    context::Context,
    stage::{Stage, StageError},
};
#[cfg(feature = "simd")]
use simdutf8::basic::from_utf8;
use std::borrow::Cow;

/// Precondition guard: proves the input bytes really are UTF-8 before any
/// conversion stage runs. Opt-in via `QazarabBuilder::with_validation`;
/// a failure here is API misuse, not a text-level error.
pub struct Utf8Validate;

impl Stage for Utf8Validate {
    fn name(&self) -> &'static str {
        "utf8_validate"
    }

    fn needs_apply(&self, _: &str, _: &Context) -> Result<bool, StageError> {
        Ok(true)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _: &Context) -> Result<Cow<'a, str>, StageError> {
        #[cfg(feature = "simd")]
        {
            from_utf8(text.as_bytes())
                .map_err(|e| StageError::Validation("utf8_validate", e.to_string()))?;
            Ok(text)
        }
        #[cfg(not(feature = "simd"))]
        {
            // Scalar fallback when compiled without SIMD
            std::str::from_utf8(text.as_bytes())
                .map_err(|e| StageError::Validation("utf8_validate", e.to_string()))?;
            Ok(text)
        }
    }
}
