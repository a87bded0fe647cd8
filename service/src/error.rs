use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("payload too large: {size} > {max}")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
