use thiserror::Error;

use crate::model::{ProfileError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}
