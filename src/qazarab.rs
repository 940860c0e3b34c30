use thiserror::Error;

use crate::{
    context::Context,
    pipeline::Pipeline,
    stage::{Stage, StageError, convert_words::ConvertWords, map_punctuation::MapPunctuation,
        utf8_validate::Utf8Validate},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error)]
pub enum QazarabError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

/// The direction-agnostic converter contract.
///
/// The Arabic→Cyrillic mirror lives behind the same trait, so application
/// code can hold either direction (or both) without knowing which rule set
/// is inside.
pub trait Convert: Send + Sync {
    fn convert<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, QazarabError>;
}

/// Cyrillic → Arabic-script (Töte) converter.
///
/// A frozen stage pipeline over frozen tables: build once, then call
/// [`convert`](Qazarab::convert) from as many threads as you like.
pub struct Qazarab {
    ctx: Context,
    pipeline: Pipeline,
}

impl Qazarab {
    /// The standard pipeline: punctuation mapping, then word conversion.
    pub fn new() -> Self {
        Self::builder()
            .add_stage(MapPunctuation)
            .add_stage(ConvertWords)
            .build()
    }

    pub fn builder() -> QazarabBuilder {
        QazarabBuilder::default()
    }

    /// Convert a text. Total over its input: every string maps to a defined
    /// output, and unmapped characters pass through identically. Returns
    /// `Cow::Borrowed` when no stage had anything to do.
    pub fn convert<'a>(
        &self,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, QazarabError> {
        Ok(self.pipeline.process(text.into(), &self.ctx)?)
    }
}

impl Default for Qazarab {
    fn default() -> Self {
        Self::new()
    }
}

impl Convert for Qazarab {
    fn convert<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, QazarabError> {
        Qazarab::convert(self, text)
    }
}

pub struct QazarabBuilder {
    ctx: Context,
    stages: SmallVec<[Arc<dyn Stage>; 4]>,
    validate: bool,
}

impl Default for QazarabBuilder {
    fn default() -> Self {
        Self {
            ctx: Context::default(),
            stages: SmallVec::new(),
            validate: false,
        }
    }
}

impl QazarabBuilder {
    /// Override the rule tables (mirror-direction entries plug in here).
    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Prepend the UTF-8 precondition stage.
    pub fn with_validation(mut self) -> Self {
        self.validate = true;
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Qazarab {
        let mut stages = self.stages;
        if self.validate {
            stages.insert(0, Arc::new(Utf8Validate));
        }
        Qazarab {
            ctx: self.ctx,
            pipeline: Pipeline::new(stages),
        }
    }
}
