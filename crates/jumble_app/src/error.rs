use jumble_i18n::I18nError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error("unknown primary page `{0}`")]
    UnknownPage(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
