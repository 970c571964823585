pub mod error;
pub mod padding;

pub use error::PaddingError;
pub use padding::ansi_x923::{pad, unpad, MAX_BLOCK_SIZE};
