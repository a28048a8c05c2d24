use thiserror::Error;

use crate::catalog::SimpleParseError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    SimpleParse(#[from] SimpleParseError),

    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),
}
