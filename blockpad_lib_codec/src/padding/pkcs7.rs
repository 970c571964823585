use crate::error::{check_block_size, PaddingError};
use crate::padding::base::{check_framing, pad_len, PaddingAlgorithm};

/// Every padding byte carries the pad length, so it has to fit in a `u8`.
pub const MAX_BLOCK_SIZE: usize = 255;

fn pad_unchecked(input: &[u8], block_size: usize) -> Vec<u8> {
    let pad_bytes = pad_len(input.len(), block_size);
    let mut out = Vec::with_capacity(input.len() + pad_bytes);
    out.extend_from_slice(input);
    out.resize(input.len() + pad_bytes, pad_bytes as u8);
    out
}

pub fn pad(input: &[u8], block_size: usize) -> Result<Vec<u8>, PaddingError> {
    check_block_size(block_size, MAX_BLOCK_SIZE)?;
    Ok(pad_unchecked(input, block_size))
}

fn trailing_pad_len(input: &[u8]) -> Result<usize, PaddingError> {
    let pad_bytes = match input.last() {
        Some(&b) => b as usize,
        None => return Err(PaddingError::InvalidMessage("empty buffer")),
    };
    if pad_bytes == 0 {
        return Err(PaddingError::InvalidMessage("zero pad length"));
    }
    if input.len() < pad_bytes {
        log::debug!("pad length {} exceeds buffer of {} bytes", pad_bytes, input.len());
        return Err(PaddingError::InvalidMessage("buffer shorter than pad length"));
    }
    Ok(pad_bytes)
}

pub fn unpad(input: &[u8]) -> Result<Vec<u8>, PaddingError> {
    let pad_bytes = trailing_pad_len(input)?;
    let end = input.len() - pad_bytes;
    if input[end..].iter().any(|&b| b as usize != pad_bytes) {
        log::debug!("inconsistent bytes in {} trailing bytes", pad_bytes);
        return Err(PaddingError::InvalidMessage("padding bytes differ from pad length"));
    }
    Ok(input[..end].to_vec())
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pkcs7 {
    block_size: usize,
}


impl Default for Pkcs7 {
    fn default() -> Self {
        Self { block_size: 16 }
    }
}


impl PaddingAlgorithm for Pkcs7 {
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
    fn test_pad() {
        assert_eq!(pad(b"hello", 8).unwrap(), b"hello\x03\x03\x03");
        assert_eq!(pad(&[0u8; 16], 16).unwrap()[16..], [16u8; 16]);
        assert_eq!(Pkcs7::default().apply_padding(b"").len(), 16);
    }

    #[test]
    fn test_block_size_limit() {
        assert!(pad(b"abc", 255).is_ok());
        assert_eq!(
            pad(b"abc", 256),
            Err(PaddingError::InvalidBlockSize { block_size: 256, max: 255 })
        );
        assert!(Pkcs7::with_block_size(0).is_err());
    }

    #[test]
    fn test_unpad() {
        assert_eq!(unpad(b"hello\x03\x03\x03").unwrap(), b"hello");
        assert_eq!(unpad(b"\x01").unwrap(), b"");
    }

    #[test]
    fn test_unpad_rejects_malformed() {
        assert!(matches!(unpad(b""), Err(PaddingError::InvalidMessage(_))));
        assert!(matches!(unpad(b"abc\x00"), Err(PaddingError::InvalidMessage(_))));
        assert!(matches!(unpad(b"\x03\x03"), Err(PaddingError::InvalidMessage(_))));
        assert!(matches!(unpad(b"a\x04\x03\x02\x03"), Err(PaddingError::InvalidMessage(_))));
    }

    #[test]
    fn test_remove_padding_checks_framing() {
        let padder = Pkcs7::with_block_size(4).unwrap();
        assert!(padder.remove_padding(&[5u8; 8]).is_err());
        assert!(padder.remove_padding(b"abc\x01\x01").is_err());
        assert_eq!(padder.remove_padding(b"abc\x01").unwrap(), b"abc");
    }
}
