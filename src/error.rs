// Standard errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(&'static str),
    /// The reserved top nibble of a permission word was not zero.
    #[error("Malformed permission word {0:#06x}")]
    MalformedPermissionWord(u16),
    #[error("Backend configuration failed: {0}")]
    BackendConfiguration(&'static str),
}
