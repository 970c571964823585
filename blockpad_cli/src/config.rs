use blockpad_lib_codec::padding::PaddingScheme;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const SCHEME_VAR: &str = "BLOCKPAD_SCHEME";
pub const BLOCK_SIZE_VAR: &str = "BLOCKPAD_BLOCK_SIZE";

/// Pad or unpad data to a block boundary.
///
/// Defaults can come from `BLOCKPAD_*` variables, including ones set in `.env`.
#[derive(Parser, Debug)]
#[command(name = "blockpad", version)]
pub struct Settings {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, env = SCHEME_VAR, default_value_t = PaddingScheme::default())]
    pub scheme: PaddingScheme,

    /// Ignored by `unpad`
    #[arg(long, global = true, env = BLOCK_SIZE_VAR)]
    pub block_size: Option<usize>,

    /// Read from stdin when omitted
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Write to stdout when omitted
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Pad,
    Unpad,
}

impl Settings {
    pub fn block_size(&self) -> usize {
        self.block_size
            .unwrap_or_else(|| self.scheme.default_block_size())
    }
}

/// Loads `path`, or `.env` from the working directory or its parents.
///
/// Variables already present in the environment are not overridden.
/// A missing file is not an error.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>, dotenvy::Error> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
