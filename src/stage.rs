//! Core conversion stage abstraction.
//!
//! A stage is one pass over the text. `needs_apply` is a cheap pre-check:
//! returning `Ok(false)` skips the stage entirely and keeps the input
//! `Cow::Borrowed`, so text that needs no work is never copied. `apply`
//! must always be correct on its own — the pre-check is an optimization,
//! not a contract.

pub mod convert_words;
pub mod map_punctuation;
pub mod utf8_validate;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Conversion failed at stage `{0}`: {1}")]
    Failed(&'static str, String),

    #[error("Input validation failed at stage `{0}`: {1}")]
    Validation(&'static str, String),
}

/// A single conversion step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for profiling and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation.  Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
