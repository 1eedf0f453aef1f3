use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown variant {0:?}")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
