use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
