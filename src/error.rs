use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeySetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySetError {
    /// Construction parameters were rejected; no set was built.
    #[error("invalid key set config: {0}")]
    InvalidConfig(String),
    /// A fixed-size arena has no free slot left for a new key.
    #[error("node pool exhausted at capacity {capacity}")]
    PoolExhausted { capacity: usize },
    #[error("key not found")]
    NotFound,
}
