use thiserror::Error;

use crate::model::{CompletionCodecError, PlanError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    CompletionCodec(#[from] CompletionCodecError),
}
