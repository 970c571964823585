//! ANSI X.923 padding: zero filler bytes closed by a one-byte pad length.
//!
//! The length byte holds `pad_len mod 256`, so a full 256-byte block of
//! padding is encoded as a trailing `0x00`.

use crate::error::{check_block_size, PaddingError};
use crate::padding::base::{check_framing, pad_len, trailing_pad_len, PaddingAlgorithm};

pub const MAX_BLOCK_SIZE: usize = 256;
pub const DEFAULT_BLOCK_SIZE: usize = 256;

fn pad_unchecked(input: &[u8], block_size: usize) -> Vec<u8> {
    let pad_bytes = pad_len(input.len(), block_size);
    let mut out = Vec::with_capacity(input.len() + pad_bytes);
    out.extend_from_slice(input);
    out.resize(input.len() + pad_bytes - 1, 0);
    out.push(pad_bytes as u8);
    out
}

pub fn pad(input: &[u8], block_size: usize) -> Result<Vec<u8>, PaddingError> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    Ok(pad_unchecked(input, block_size))
}

pub fn pad_default(input: &[u8]) -> Vec<u8> {
    pad_unchecked(input, DEFAULT_BLOCK_SIZE)
}

pub fn unpad(input: &[u8]) -> Result<Vec<u8>, PaddingError> {
    let pad_bytes = trailing_pad_len(input)?;
    let end = input.len() - pad_bytes;
    if input[end..input.len() - 1].iter().any(|&b| b != 0) {
        log::debug!("non-zero filler in {} trailing bytes", pad_bytes);
        return Err(PaddingError::InvalidMessage("non-zero padding byte"));
    }
    Ok(input[..end].to_vec())
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnsiX923 {
    block_size: usize,
}


impl Default for AnsiX923 {
    fn default() -> Self {
        Self { block_size: DEFAULT_BLOCK_SIZE }
    }
}


impl PaddingAlgorithm for AnsiX923 {
    const MAX_BLOCK_SIZE: usize = MAX_BLOCK_SIZE;

    fn with_block_size(size: usize) -> Result<Self, PaddingError> {
        check_block_size(size, Self::MAX_BLOCK_SIZE)?;
        Ok(Self { block_size: size })
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn apply_padding(&self, input: &[u8]) -> Vec<u8> {
        pad_unchecked(input, self.block_size)
    }

    fn remove_padding(&self, input: &[u8]) -> Result<Vec<u8>, PaddingError> {
        check_framing(input, trailing_pad_len(input)?, self.block_size)?;
        unpad(input)
    }
}
