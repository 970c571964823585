use crate::error::PaddingError;
use crate::padding::{ansi_x923, iso10126, pkcs7, AnsiX923, Iso10126, PaddingAlgorithm, Pkcs7};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaddingScheme {
    #[default]
    #[serde(rename = "ansi-x923")]
    AnsiX923,
    Pkcs7,
    Iso10126,
}

impl PaddingScheme {
    pub fn pad(&self, input: &[u8], block_size: usize) -> Result<Vec<u8>, PaddingError> {
        match self {
            PaddingScheme::AnsiX923 => ansi_x923::pad(input, block_size),
            PaddingScheme::Pkcs7 => pkcs7::pad(input, block_size),
            PaddingScheme::Iso10126 => iso10126::pad(input, block_size),
        }
    }

    pub fn unpad(&self, input: &[u8]) -> Result<Vec<u8>, PaddingError> {
        match self {
            PaddingScheme::AnsiX923 => ansi_x923::unpad(input),
            PaddingScheme::Pkcs7 => pkcs7::unpad(input),
            PaddingScheme::Iso10126 => iso10126::unpad(input),
        }
    }

    /// Block size used when the caller does not pick one.
    pub fn default_block_size(&self) -> usize {
        match self {
            PaddingScheme::AnsiX923 => AnsiX923::default().block_size(),
            PaddingScheme::Pkcs7 => Pkcs7::default().block_size(),
            PaddingScheme::Iso10126 => Iso10126::default().block_size(),
        }
    }

    pub fn max_block_size(&self) -> usize {
        match self {
            PaddingScheme::AnsiX923 => AnsiX923::MAX_BLOCK_SIZE,
            PaddingScheme::Pkcs7 => Pkcs7::MAX_BLOCK_SIZE,
            PaddingScheme::Iso10126 => Iso10126::MAX_BLOCK_SIZE,
        }
    }
}

impl fmt::Display for PaddingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaddingScheme::AnsiX923 => "ansi-x923",
            PaddingScheme::Pkcs7 => "pkcs7",
            PaddingScheme::Iso10126 => "iso10126",
        })
    }
}

impl FromStr for PaddingScheme {
    type Err = PaddingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ansi-x923" | "ansix923" | "x923" => Ok(PaddingScheme::AnsiX923),
            "pkcs7" | "pkcs#7" => Ok(PaddingScheme::Pkcs7),
            "iso10126" | "iso-10126" => Ok(PaddingScheme::Iso10126),
            _ => Err(PaddingError::UnknownScheme(s.to_owned())),
        }
    }
}
