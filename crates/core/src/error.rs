use thiserror::Error;

use crate::model::{OutlineError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Outline(#[from] OutlineError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
