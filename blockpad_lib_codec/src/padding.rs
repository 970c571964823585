mod base;
pub mod ansi_x923;
pub mod iso10126;
pub mod pkcs7;
mod scheme;

pub use ansi_x923::AnsiX923;
pub use base::PaddingAlgorithm;
pub use iso10126::Iso10126;
pub use pkcs7::Pkcs7;
pub use scheme::PaddingScheme;
