use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropsearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Unknown drop zone: {0}")]
    UnknownZone(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PropsearchError>;
