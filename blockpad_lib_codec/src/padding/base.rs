use crate::error::PaddingError;

pub trait PaddingAlgorithm
where
    Self: Copy
{
    const MAX_BLOCK_SIZE: usize;

    fn with_block_size(size: usize) -> Result<Self, PaddingError>;
    fn block_size(&self) -> usize;

    fn apply_padding(&self, input: &[u8]) -> Vec<u8>;
    fn remove_padding(&self, input: &[u8]) -> Result<Vec<u8>, PaddingError>;
}

/// Number of bytes needed to reach the next block boundary, in `1..=block_size`.
pub(crate) fn pad_len(len: usize, block_size: usize) -> usize {
    block_size - len % block_size
}

/// Reads a one-byte length trailer. Zero stands for a full 256-byte block.
pub(crate) fn trailing_pad_len(input: &[u8]) -> Result<usize, PaddingError> {
    let last = match input.last() {
        Some(&b) => b,
        None => return Err(PaddingError::InvalidMessage("empty buffer")),
    };
    let pad_len = if last == 0 { 256 } else { last as usize };
    if input.len() < pad_len {
        log::debug!("pad length {} exceeds buffer of {} bytes", pad_len, input.len());
        return Err(PaddingError::InvalidMessage("buffer shorter than pad length"));
    }
    Ok(pad_len)
}

pub(crate) fn check_framing(
    input: &[u8],
    pad_len: usize,
    block_size: usize,
) -> Result<(), PaddingError> {
    if input.len() % block_size != 0 {
        log::debug!("{} bytes are not aligned to {}", input.len(), block_size);
        return Err(PaddingError::InvalidMessage("buffer not aligned to block size"));
    }
    if pad_len > block_size {
        log::debug!("pad length {} exceeds block size {}", pad_len, block_size);
        return Err(PaddingError::InvalidMessage("pad length exceeds block size"));
    }
    Ok(())
}
