//! Error types for the object pool

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Object released to pool '{pool}' is already in its free list")]
    DoubleRelease { pool: String },
}

pub type PoolResult<T> = Result<T, PoolError>;
