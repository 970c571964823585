//! ISO 10126 padding: random filler bytes closed by a one-byte pad length.

use crate::error::{check_block_size, PaddingError};
use crate::padding::base::{check_framing, pad_len, trailing_pad_len, PaddingAlgorithm};
use rand::{thread_rng, RngCore};

pub const MAX_BLOCK_SIZE: usize = 256;

fn pad_unchecked(input: &[u8], block_size: usize) -> Vec<u8> {
    let pad_bytes = pad_len(input.len(), block_size);
    let mut out = Vec::with_capacity(input.len() + pad_bytes);
    out.extend_from_slice(input);
    out.resize(input.len() + pad_bytes - 1, 0);
    thread_rng().fill_bytes(&mut out[input.len()..]);
    out.push(pad_bytes as u8);
    out
}

pub fn pad(input: &[u8], block_size: usize) -> Result<Vec<u8>, PaddingError> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    Ok(pad_unchecked(input, block_size))
}

/// Filler bytes are random, only the length trailer can be checked.
pub fn unpad(input: &[u8]) -> Result<Vec<u8>, PaddingError> {
    let pad_bytes = trailing_pad_len(input)?;
    Ok(input[..input.len() - pad_bytes].to_vec())
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Iso10126 {
    block_size: usize,
}


impl Default for Iso10126 {
    fn default() -> Self {
        Self { block_size: MAX_BLOCK_SIZE }
    }
}


impl PaddingAlgorithm for Iso10126 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_layout() {
        let padded = pad(b"abc", 8).unwrap();
        assert_eq!(padded.len(), 8);
        assert_eq!(&padded[..3], b"abc");
        assert_eq!(padded[7], 5);

        let padded = pad(b"abcd", 4).unwrap();
        assert_eq!(padded.len(), 8);
        assert_eq!(padded[7], 4);
    }

    #[test]
    fn test_filler_is_not_checked() {
        assert_eq!(unpad(b"ab\xff\x13\x03").unwrap(), b"ab");

        let mut block = vec![9u8; 256];
        block[255] = 0;
        assert_eq!(unpad(&block).unwrap(), b"");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(pad(b"abc", 257), Err(PaddingError::InvalidBlockSize { .. })));
        assert!(matches!(unpad(b""), Err(PaddingError::InvalidMessage(_))));
        assert!(matches!(unpad(b"\x01\x09"), Err(PaddingError::InvalidMessage(_))));
    }

    #[test]
    fn test_remove_padding_checks_framing() {
        let padder = Iso10126::with_block_size(4).unwrap();
        assert!(padder.remove_padding(b"ab\x00\x00\x03").is_err());
        assert_eq!(padder.remove_padding(b"a\x42\x17\x03").unwrap(), b"a");
    }
}
