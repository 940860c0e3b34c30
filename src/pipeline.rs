// src/pipeline.rs
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// Ordered stage list. Stages run sequentially; a stage whose `needs_apply`
/// says no is skipped, which is what keeps unchanged text zero-copy end to
/// end.
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl Pipeline {
    pub fn new(stages: SmallVec<[Arc<dyn Stage>; 4]>) -> Self {
        Self { stages }
    }

    pub fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current, ctx)? {
                continue;
            }

            current = stage.apply(current, ctx)?;
        }

        Ok(current)
    }
}
