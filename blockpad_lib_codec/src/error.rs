use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaddingError {
    #[error("invalid block size {block_size}, expected 1..={max}")]
    InvalidBlockSize { block_size: usize, max: usize },

    #[error("invalid padded message: {0}")]
    InvalidMessage(&'static str),

    #[error("unknown padding scheme `{0}`")]
    UnknownScheme(String),
}

pub(crate) fn check_block_size(block_size: usize, max: usize) -> Result<(), PaddingError> {
    if block_size == 0 || block_size > max {
        return Err(PaddingError::InvalidBlockSize { block_size, max });
    }
    Ok(())
}
