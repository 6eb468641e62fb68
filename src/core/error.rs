use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Catalog has {available} rounds, sprint needs {requested}")]
    InsufficientCatalogSize { available: usize, requested: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
